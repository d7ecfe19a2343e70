use axum::{extract::Request, middleware::Next, response::Response};
use tower_sessions::Session;

use crate::auth::session::{self, SessionUser};
use crate::db::models::Role;
use crate::error::AppError;

/// Reject unauthenticated requests with 401.
///
/// On success the resolved [`SessionUser`] is inserted into the request
/// extensions so handlers and downstream guards can read it without touching
/// the session store again.
pub async fn require_auth(
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    match session::current(&session).await? {
        Some(user) => {
            request.extensions_mut().insert(user);
            Ok(next.run(request).await)
        }
        None => Err(AppError::Unauthorized("Authentication required".to_string())),
    }
}

/// Reject requests whose session role is not exactly `role` with 403.
///
/// Must run after [`require_auth`]; a missing extension means the route was
/// wired without it, and the request is treated as unauthenticated.
pub async fn require_role(role: Role, request: Request, next: Next) -> Result<Response, AppError> {
    let user = request
        .extensions()
        .get::<SessionUser>()
        .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))?;

    if user.role != role {
        return Err(AppError::Forbidden(format!("role '{}' required", role)));
    }

    Ok(next.run(request).await)
}
