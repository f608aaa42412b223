// src/middleware/cors.rs

use axum::http::{header, HeaderName, HeaderValue, Method};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

/// CORS ミドルウェア設定
///
/// `*` が含まれる場合はすべてのオリジンを許可する。
pub fn cors_layer(allowed_origins: &[String], api_key_header: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .max_age(Duration::from_secs(3600)); // プリフライトリクエストのキャッシュ時間

    if allowed_origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any).allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let mut headers = vec![header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];
    // APIキーのヘッダー名は設定で変更できる
    if let Ok(name) = HeaderName::try_from(api_key_header) {
        if !headers.contains(&name) {
            headers.push(name);
        }
    }

    layer
        .allow_origin(origins)
        .allow_headers(headers)
        .allow_credentials(true)
}
