// src/api/mod.rs
use crate::config::AppConfig;
use crate::db::DbPool;
use crate::logging::{inject_request_context, logging_middleware};
use crate::middleware::cors::cors_layer;
use crate::service::{boilerplate_service::BoilerplateService, health_service::HealthService};
use axum::{middleware, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod dto;
pub mod handlers;

/// 統一されたアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub boilerplate_service: Arc<BoilerplateService>,
    pub health_service: Arc<HealthService>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db_pool: DbPool, config: Arc<AppConfig>) -> Self {
        Self {
            boilerplate_service: Arc::new(BoilerplateService::new(db_pool.clone())),
            health_service: Arc::new(HealthService::new(Arc::new(db_pool))),
            config,
        }
    }
}

/// 全ルーターとミドルウェアを組み立てる
pub fn app_router(app_state: AppState) -> Router {
    let cors = cors_layer(
        &app_state.config.cors_allowed_origins,
        &app_state.config.api_key.header,
    );

    Router::new()
        .merge(handlers::health_handler::health_router(app_state.clone()))
        .merge(handlers::boilerplate_handler::boilerplate_router(app_state))
        // 下に書いたレイヤーほど外側で実行される
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(inject_request_context))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
