//! # Admin Handlers
//!
//! Example route gated on role=admin.

use axum::{Extension, Json};
use serde_json::{json, Value};

use crate::auth::session::SessionUser;

/// ## Route
/// GET /admin/check (requires authentication + role=admin)
///
/// Returns the caller's username as proof the gate was passed.
pub async fn admin_check(Extension(user): Extension<SessionUser>) -> Json<Value> {
    Json(json!({
        "message": "hello admin",
        "username": user.username,
    }))
}
