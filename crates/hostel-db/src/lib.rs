//! # Hostel DB
//!
//! Connection pool and schema setup for the Hostel API.
//!
//! The schema lives in the workspace `migrations/` directory and is embedded
//! into the binary. Every statement uses `IF NOT EXISTS`, so running the
//! migrations against an existing database is non-destructive.
//!
//! # Example
//!
//! ```ignore
//! use hostel_config::DatabaseConfig;
//! use hostel_db::{init_db_pool, run_migrations};
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
//! run_migrations(&pool).await?;
//! ```

use std::time::Duration;

use hostel_config::DatabaseConfig;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;
use tracing::info;

pub use sqlx::PgPool;

pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Initializes a PostgreSQL connection pool.
///
/// The returned pool is cheaply cloneable and is handed to request handlers
/// through the application state.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&config.url)
        .await?;

    info!(max_connections = config.max_connections, "Database pool initialized");
    Ok(pool)
}

/// Creates any missing tables.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    info!("Database schema is up to date");
    Ok(())
}
