// src/service/mod.rs
pub mod boilerplate_service;
pub mod health_service;
