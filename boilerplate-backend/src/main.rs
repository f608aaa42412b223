// src/main.rs
use boilerplate_backend::api::{app_router, AppState};
use boilerplate_backend::config::AppConfig;
use boilerplate_backend::db::{create_db_pool, run_migrations};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // トレーシングの設定
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boilerplate_backend=info,tower_http=info".into()),
        )
        .with(fmt::layer())
        .init();

    // 設定を読み込む (起動時に一度だけ構築し、以降は読み取り専用で共有する)
    let app_config = Arc::new(AppConfig::from_env()?);
    tracing::info!(
        title = %app_config.app_title,
        version = %app_config.version,
        environment = %app_config.environment,
        "Starting server..."
    );

    // データベース接続を作成
    let db_pool = create_db_pool(&app_config.database).await?;
    tracing::info!(
        host = %app_config.database.host,
        database = %app_config.database.name,
        "Database pool created successfully."
    );

    if app_config.run_migrations {
        run_migrations(&db_pool).await?;
        tracing::info!("Database migrations applied.");
    }

    // ルーターの設定
    let app_state = AppState::new(db_pool, app_config.clone());
    let app_router = app_router(app_state);

    // サーバーの起動
    let listener = TcpListener::bind(app_config.server_addr()).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app_router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down gracefully.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received.");
}
