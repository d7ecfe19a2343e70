//! # Guest Handlers
//!
//! Example route gated on role=guest.

use axum::{extract::State, Extension, Json};
use serde_json::{json, Value};

use crate::auth::session::SessionUser;
use crate::db::guests;
use crate::error::AppResult;
use crate::state::AppState;

/// ## Route
/// GET /guest/profile (requires authentication + role=guest)
///
/// Looks up the guests row matching the session's user id. A guest user
/// without a row gets `{"guest": null}`, not an error.
pub async fn guest_profile(
    State(state): State<AppState>,
    Extension(user): Extension<SessionUser>,
) -> AppResult<Json<Value>> {
    let guest = guests::find_by_user_id(&state.db, user.user_id).await?;

    Ok(Json(json!({
        "guest": guest,
    })))
}
