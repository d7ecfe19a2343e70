//! Main entry point for the hotel-management API server.
//!
//! Initializes logging, loads configuration from the environment, connects
//! the database pool, and serves the router built in the library crate.

use hotel_api_server::config::Config;
use hotel_api_server::state::AppState;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default: info level overall, debug for this crate.
    // Override with the RUST_LOG environment variable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,hotel_api_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded: {:?}", config);

    let state = AppState::new(&config).await?;
    tracing::info!("Database pool ready, migrations applied");

    // Permissive CORS so a frontend served from another origin can call the
    // API. Restrict the origin in production.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = hotel_api_server::app(state)
        .await?
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let bind_addr = config.bind_address();
    tracing::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
