//! # Index Handler
//!
//! Root route with an optional session: greets a logged-in user, points
//! everyone else at /login and /register.

use axum::Json;
use serde_json::{json, Value};
use tower_sessions::Session;

use crate::auth::session;
use crate::error::AppResult;

/// ## Route
/// GET /
///
/// ## Response
/// Logged in:
/// ```json
/// { "message": "Logged in as alice", "user_id": 1, "role": "guest" }
/// ```
/// Anonymous:
/// ```json
/// { "message": "Welcome to the Hotel Management API. Use /login or /register." }
/// ```
pub async fn index(session: Session) -> AppResult<Json<Value>> {
    match session::current(&session).await? {
        Some(user) => Ok(Json(json!({
            "message": format!("Logged in as {}", user.username),
            "user_id": user.user_id,
            "role": user.role,
        }))),
        None => Ok(Json(json!({
            "message": "Welcome to the Hotel Management API. Use /login or /register.",
        }))),
    }
}
