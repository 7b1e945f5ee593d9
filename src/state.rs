use anyhow::Context;
use sqlx::PgPool;

use hostel_config::{CorsConfig, DatabaseConfig, SecurityConfig};
use hostel_db::{init_db_pool, run_migrations};

/// Shared handler state. Handlers receive the pool through `State<AppState>`.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub cors_config: CorsConfig,
    pub security_config: SecurityConfig,
}

impl AppState {
    pub fn new(db: PgPool, cors_config: CorsConfig, security_config: SecurityConfig) -> Self {
        Self {
            db,
            cors_config,
            security_config,
        }
    }
}

/// Connects to the database, creates any missing tables and loads config.
pub async fn init_app_state() -> anyhow::Result<AppState> {
    let db_config = DatabaseConfig::from_env();
    let db = init_db_pool(&db_config)
        .await
        .context("Failed to connect to database")?;

    run_migrations(&db)
        .await
        .context("Failed to create database schema")?;

    Ok(AppState::new(
        db,
        CorsConfig::from_env(),
        SecurityConfig::from_env(),
    ))
}
