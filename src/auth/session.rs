//! # Session state
//!
//! The server-side record backing an authenticated session. The client only
//! ever holds the opaque session-id cookie managed by the session layer; the
//! [`SessionUser`] snapshot lives in the store and is resolved from the
//! cookie on each request.
//!
//! The snapshot is taken at login time. If the underlying user row changes
//! afterwards the session keeps serving the old values until logout or
//! expiry.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::db::models::Role;
use crate::error::{AppError, AppResult};

const USER_KEY: &str = "user";

/// Authenticated-user state stored in the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub user_id: i64,
    pub username: String,
    pub role: Role,
}

/// Establish a new session for a freshly authenticated user.
///
/// The session layer attaches the id cookie to the response once the record
/// is inserted.
pub async fn establish(session: &Session, user: SessionUser) -> AppResult<()> {
    session.insert(USER_KEY, user).await.map_err(internal)
}

/// Resolve the current session, if any.
///
/// Returns `None` when the request carries no cookie, an unknown id, or an
/// expired session.
pub async fn current(session: &Session) -> AppResult<Option<SessionUser>> {
    session.get(USER_KEY).await.map_err(internal)
}

/// Destroy the session; subsequent [`current`] calls on the same cookie
/// return `None`.
pub async fn destroy(session: &Session) -> AppResult<()> {
    session.delete().await.map_err(internal)
}

fn internal(e: tower_sessions::session::Error) -> AppError {
    AppError::Internal(format!("Session error: {}", e))
}
