//! # Hotel Management API Server
//!
//! A minimal hotel-management backend: registration, session-based login and
//! logout, and role-gated example routes. Sessions live server-side in the
//! SQLite-backed session store; the client holds only the opaque session-id
//! cookie.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;

use axum::{
    extract::Request,
    middleware as axum_middleware,
    middleware::Next,
    routing::{get, post},
    Router,
};
use time::Duration;
use tower_sessions::{ExpiredDeletion, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::db::models::Role;
use crate::state::AppState;

/// Build the application router on top of the given state.
///
/// Sets up the SQLite-backed session store (running its migration and
/// spawning the periodic expired-session sweep) and wires every route,
/// wrapping the protected groups in their guards. Layers run outermost
/// first, so on each protected router the `require_auth` layer added last
/// executes before the role check.
pub async fn app(state: AppState) -> anyhow::Result<Router> {
    let session_store = SqliteStore::new(state.db.clone());
    session_store.migrate().await?;

    // Sweep expired sessions out of the store every 10 minutes so the
    // table doesn't accumulate dead rows.
    tokio::task::spawn(
        session_store
            .clone()
            .continuously_delete_expired(std::time::Duration::from_secs(600)),
    );

    let session_layer = SessionManagerLayer::new(session_store)
        .with_expiry(Expiry::OnInactivity(Duration::hours(24)));

    let admin_routes = Router::new()
        .route("/admin/check", get(handlers::admin::admin_check))
        .layer(axum_middleware::from_fn(
            move |request: Request, next: Next| {
                middleware::auth::require_role(Role::Admin, request, next)
            },
        ))
        .layer(axum_middleware::from_fn(middleware::auth::require_auth));

    let guest_routes = Router::new()
        .route("/guest/profile", get(handlers::guests::guest_profile))
        .layer(axum_middleware::from_fn(
            move |request: Request, next: Next| {
                middleware::auth::require_role(Role::Guest, request, next)
            },
        ))
        .layer(axum_middleware::from_fn(middleware::auth::require_auth));

    let session_routes = Router::new()
        .route("/logout", post(handlers::auth::logout))
        .layer(axum_middleware::from_fn(middleware::auth::require_auth));

    let app = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/", get(handlers::index::index))
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .merge(session_routes)
        .merge(admin_routes)
        .merge(guest_routes)
        .layer(session_layer)
        .with_state(state);

    Ok(app)
}
