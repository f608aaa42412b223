// src/repository/mod.rs
pub mod boilerplate_repository;
