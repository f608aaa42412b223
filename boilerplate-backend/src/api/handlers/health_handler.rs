// src/api/handlers/health_handler.rs
use crate::api::dto::health_dto::HealthDto;
use crate::api::AppState;
use axum::{extract::State, routing::get, Json, Router};

pub async fn health_check_handler(State(app_state): State<AppState>) -> Json<HealthDto> {
    Json(app_state.health_service.check().await)
}

pub fn health_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check_handler))
        .with_state(app_state)
}
