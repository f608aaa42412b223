// tests/common/request.rs
use axum::{
    body::{self, Body},
    http::{header, Method, Request, Response},
};
use serde_json::Value;

use super::app_helper::api_key;

/// APIキー付きのHTTPリクエストを作成
pub fn create_request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let (header_name, key) = api_key();
    build_request(method, uri, body, Some((&header_name, &key)))
}

/// APIキーなしのHTTPリクエストを作成
pub fn create_unauthenticated_request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    build_request(method, uri, body, None)
}

/// 任意のAPIキーでHTTPリクエストを作成
pub fn create_request_with_key(
    method: &str,
    uri: &str,
    header_name: &str,
    key: &str,
) -> Request<Body> {
    build_request(method, uri, None, Some((header_name, key)))
}

fn build_request(
    method: &str,
    uri: &str,
    body: Option<Value>,
    api_key: Option<(&str, &str)>,
) -> Request<Body> {
    let method = Method::from_bytes(method.as_bytes()).unwrap();
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some((name, key)) = api_key {
        builder = builder.header(name, key);
    }

    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// レスポンスボディをJSONとして読み取る
pub async fn response_json(res: Response<Body>) -> Value {
    let bytes = body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
