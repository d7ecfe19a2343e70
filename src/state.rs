//! # Application State
//!
//! Shared state accessible to all request handlers. The connection pool is
//! created once at startup and cloned into each handler by Axum; `SqlitePool`
//! is itself a cheap handle over the pooled connections, so cloning the state
//! does not open new connections.

use crate::config::Config;
use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    ///
    /// Bounded by `Config::db_pool_size`; requests past the limit block
    /// waiting for a free connection.
    pub db: SqlitePool,
}

impl AppState {
    /// Initialize application state
    ///
    /// Connects to the SQLite database and runs the embedded migrations
    /// (creating the `users` and `guests` tables on first start).
    ///
    /// # Errors
    /// Returns an error if the database connection or a migration fails.
    pub async fn new(config: &Config) -> Result<Self> {
        let db = SqlitePoolOptions::new()
            .max_connections(config.db_pool_size)
            .connect(&config.database_url)
            .await?;

        // The `sqlx::migrate!` macro embeds migrations from ./migrations
        // at compile time; applied migrations are tracked and not re-run.
        sqlx::migrate!("./migrations").run(&db).await?;

        Ok(AppState { db })
    }
}
