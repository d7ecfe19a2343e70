//! # Configuration Management
//!
//! This module handles loading configuration from environment variables.
//! Configuration is an explicitly constructed value passed into state
//! construction, never process-wide mutable state.
//!
//! ## Environment Variables
//! - `HOST`: Server bind address (default: 127.0.0.1)
//! - `PORT`: Server port (default: 8080)
//! - `DATABASE_URL`: SQLite database connection string
//! - `DB_POOL_SIZE`: Maximum database connections (default: 5)

use anyhow::Result;
use std::env;

/// Application configuration
///
/// Holds everything needed to run the server. All fields are public for easy
/// access from other modules.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host/IP address to bind to
    /// Examples: "127.0.0.1" (localhost only), "0.0.0.0" (all interfaces)
    pub host: String,

    /// Server port number (1-65535)
    pub port: u16,

    /// SQLite database connection URL
    /// Format: "sqlite:filename.db?mode=rwc"
    /// The "mode=rwc" means: read, write, create if not exists
    pub database_url: String,

    /// Maximum number of pooled database connections
    ///
    /// Requests beyond this limit wait for a free connection.
    pub db_pool_size: u32,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Loads variables from a `.env` file first if one is present (dotenvy
    /// doesn't error when the file is missing), then reads each value from
    /// the environment with sensible defaults. Parsing failures (e.g. a
    /// non-numeric `PORT`) surface as errors.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),

            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,

            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:hotel.db?mode=rwc".to_string()),

            db_pool_size: env::var("DB_POOL_SIZE")
                .unwrap_or_else(|_| "5".to_string())
                .parse()?,
        })
    }

    /// Get the socket address to bind the server to
    ///
    /// Combines host and port into the format required by
    /// `tokio::net::TcpListener::bind()`. Example: "127.0.0.1:8080"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
