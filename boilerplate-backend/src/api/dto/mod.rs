// src/api/dto/mod.rs
pub mod boilerplate_dto;
pub mod health_dto;
