// src/domain/mod.rs
pub mod boilerplate_model;
pub mod boilerplate_sort;
