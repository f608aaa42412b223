// tests/common/app_helper.rs

use axum::Router;
use boilerplate_backend::api::{app_router, AppState};
use boilerplate_backend::config::AppConfig;
use std::sync::Arc;

use crate::common;

/// テスト用DBに接続したアプリ全体をセットアップ
pub async fn setup_app() -> (Router, common::db::TestDatabase) {
    let db = common::db::TestDatabase::new().await;
    let app = build_app(&db);
    (app, db)
}

/// 既存のテストDBからルーターを組み立てる
pub fn build_app(db: &common::db::TestDatabase) -> Router {
    let app_config = Arc::new(AppConfig::for_testing());
    let app_state = AppState::new(db.connection.clone(), app_config);
    app_router(app_state)
}

/// テストで使うAPIキー（AppConfig::for_testing と一致）
pub fn api_key() -> (String, String) {
    let config = AppConfig::for_testing();
    (config.api_key.header, config.api_key.key)
}
