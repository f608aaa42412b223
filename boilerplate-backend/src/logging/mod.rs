// src/logging/mod.rs

use axum::{
    body::Body,
    http::{HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use uuid::Uuid;

/// `RequestContext` の識別情報を付けてイベントを記録する。
/// レベルは実行時に決まるため、各レベルのマクロへ振り分ける。
#[macro_export]
macro_rules! log_request {
    ($level:expr, $context:expr, $msg:literal $(, $field:ident = $value:expr)* $(,)?) => {{
        let context: &$crate::logging::RequestContext = $context;
        match $level {
            ::tracing::Level::ERROR => ::tracing::error!(
                request_id = %context.request_id,
                method = %context.method,
                path = %context.path,
                $($field = %$value,)*
                $msg
            ),
            ::tracing::Level::WARN => ::tracing::warn!(
                request_id = %context.request_id,
                method = %context.method,
                path = %context.path,
                $($field = %$value,)*
                $msg
            ),
            ::tracing::Level::INFO => ::tracing::info!(
                request_id = %context.request_id,
                method = %context.method,
                path = %context.path,
                $($field = %$value,)*
                $msg
            ),
            _ => ::tracing::debug!(
                request_id = %context.request_id,
                method = %context.method,
                path = %context.path,
                $($field = %$value,)*
                $msg
            ),
        }
    }};
}

pub const REQUEST_ID_HEADER: &str = "x-request-id";

// リクエストコンテキスト
#[derive(Clone, Debug)]
pub struct RequestContext {
    pub request_id: String,
    pub path: String,
    pub method: String,
}

// ロギングミドルウェア
pub async fn logging_middleware(req: Request<Body>, next: Next) -> Response {
    let start = Instant::now();

    let context = req.extensions().get::<RequestContext>().cloned();

    if let Some(context) = &context {
        log_request!(tracing::Level::DEBUG, context, "Request started");
    }

    let response = next.run(req).await;
    let duration = start.elapsed();
    let status = response.status().as_u16();

    if let Some(context) = &context {
        let level = match status {
            500.. => tracing::Level::ERROR,
            400..=499 => tracing::Level::WARN,
            _ => tracing::Level::INFO,
        };
        log_request!(
            level,
            context,
            "Request completed",
            status = status,
            duration_ms = duration.as_millis(),
        );
    }

    response
}

// RequestContextを生成するミドルウェア
pub async fn inject_request_context(mut req: Request<Body>, next: Next) -> Response {
    // クライアントが付与したリクエストIDがあればそれを引き継ぐ
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let path = req.uri().path().to_string();
    let method = req.method().to_string();

    let context = RequestContext {
        request_id: request_id.clone(),
        path,
        method,
    };

    req.extensions_mut().insert(context);
    let mut response = next.run(req).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
