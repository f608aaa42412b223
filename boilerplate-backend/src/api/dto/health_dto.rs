// src/api/dto/health_dto.rs
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthDto {
    pub api: bool,
    pub database: bool,
}
