// src/config.rs
use dotenvy::dotenv;
use std::env;

/// PostgreSQL 接続設定
#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// 接続文字列を組み立てる
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}

/// 静的APIキーの設定
#[derive(Clone, Debug)]
pub struct ApiKeyConfig {
    pub header: String,
    pub key: String,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub environment: String,
    pub app_title: String,
    pub version: String,
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub run_migrations: bool,
    pub api_key: ApiKeyConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok(); // .env ファイルを読み込む (存在しなくてもエラーにしない)
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意のキー参照関数から設定を構築する
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            environment: var("ENVIRONMENT", "development"),
            app_title: var("APP_TITLE", "Axum SeaORM Postgres Boilerplate"),
            version: var("VERSION", "2.0.0"),
            host: var("HOST", "0.0.0.0"),
            port: var("PORT", "8000")
                .parse()
                .map_err(|_| "Invalid PORT value".to_string())?,
            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS", "*")
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            run_migrations: var("RUN_MIGRATIONS", "true") != "false",
            api_key: ApiKeyConfig {
                header: var("API_KEY_HEADER", "Authorization"),
                key: var("API_KEY", "apikey"),
            },
            database: DatabaseConfig {
                user: var("POSTGRES_USER", "user"),
                password: var("POSTGRES_PASSWORD", "password"),
                host: var("POSTGRES_HOST", "postgres"),
                port: var("POSTGRES_PORT", "5432")
                    .parse()
                    .map_err(|_| "Invalid POSTGRES_PORT value".to_string())?,
                name: var("POSTGRES_DB", "database"),
                max_connections: var("DB_MAX_CONNECTIONS", "10")
                    .parse()
                    .map_err(|_| "Invalid DB_MAX_CONNECTIONS value".to_string())?,
            },
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// テスト用の設定を作成
    pub fn for_testing() -> Self {
        Self {
            environment: "test".to_string(),
            app_title: "Boilerplate Test".to_string(),
            version: "0.0.0-test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_allowed_origins: vec!["*".to_string()],
            run_migrations: true,
            api_key: ApiKeyConfig {
                header: "Authorization".to_string(),
                key: "test-api-key".to_string(),
            },
            database: DatabaseConfig {
                user: "postgres".to_string(),
                password: "postgres".to_string(),
                host: "localhost".to_string(),
                port: 5432,
                name: "test_db".to_string(),
                max_connections: 5,
            },
        }
    }
}
