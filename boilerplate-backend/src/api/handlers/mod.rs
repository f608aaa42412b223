// src/api/handlers/mod.rs
pub mod boilerplate_handler;
pub mod health_handler;
