// src/middleware/api_key.rs

use crate::config::AppConfig;
use crate::error::AppError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::warn;

/// 設定されたヘッダーに静的APIキーが含まれているかを検証するミドルウェア
pub async fn require_api_key(
    State(config): State<Arc<AppConfig>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header_name = config.api_key.header.as_str();
    let provided = request
        .headers()
        .get(header_name)
        .and_then(|value| value.to_str().ok());

    match provided {
        Some(key) if key == config.api_key.key => Ok(next.run(request).await),
        Some(_) => {
            warn!(
                path = %request.uri().path(),
                "Rejected request with invalid API key"
            );
            Err(AppError::Unauthorized("Invalid API key".to_string()))
        }
        None => Err(AppError::Unauthorized(format!(
            "Missing API key header '{}'",
            header_name
        ))),
    }
}
