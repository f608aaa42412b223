// src/middleware/mod.rs
pub mod api_key;
pub mod cors;
