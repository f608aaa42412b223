// src/service/health_service.rs

use crate::api::dto::health_dto::HealthDto;
use crate::db::DbPool;
use std::sync::Arc;
use tracing::warn;

pub struct HealthService {
    db: Arc<DbPool>,
}

impl HealthService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    /// API とデータベースの疎通を確認する。DB のエラーは false として扱い、伝播させない。
    pub async fn check(&self) -> HealthDto {
        let database = match self.db.ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Database health check failed");
                false
            }
        };

        HealthDto {
            api: true,
            database,
        }
    }
}
