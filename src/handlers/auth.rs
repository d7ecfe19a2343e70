use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_sessions::Session;

use crate::auth::session::SessionUser;
use crate::auth::{password, session};
use crate::db::models::Role;
use crate::db::{guests, users};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Register a new guest account.
///
/// Expected JSON: `{ "username": "", "password": "", "name": "" (optional) }`.
/// Creates a users row (role=guest) and a guests row in one transaction, so
/// a failed second insert can't leave an orphaned user behind.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let (username, supplied) = match (non_empty(req.username), non_empty(req.password)) {
        (Some(u), Some(p)) => (u, p),
        _ => {
            return Err(AppError::BadRequest(
                "username and password required".to_string(),
            ))
        }
    };
    let name = non_empty(req.name).unwrap_or_else(|| username.clone());

    if users::find_by_username(&state.db, &username).await?.is_some() {
        return Err(AppError::Conflict("username already exists".to_string()));
    }

    let hashed = password::hash(&supplied)?;

    let mut tx = state.db.begin().await?;
    let user_id = users::create(&mut *tx, &username, &hashed, Role::Guest).await?;
    guests::create(&mut *tx, user_id, &name).await?;
    tx.commit().await?;

    tracing::info!(user_id, %username, "registered new guest account");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "registered successfully",
            "user_id": user_id,
        })),
    ))
}

/// Log in with username and password.
///
/// Expected JSON: `{ "username": "", "password": "" }`. Unknown usernames and
/// wrong passwords produce the same 401 so callers can't probe for accounts.
pub async fn login(
    session: Session,
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<Value>> {
    let (username, supplied) = match (non_empty(req.username), non_empty(req.password)) {
        (Some(u), Some(p)) => (u, p),
        _ => {
            return Err(AppError::BadRequest(
                "username and password required".to_string(),
            ))
        }
    };

    let user = users::find_by_username(&state.db, &username)
        .await?
        .ok_or_else(|| AppError::Unauthorized("invalid credentials".to_string()))?;

    if !password::verify(&user.password, &supplied) {
        return Err(AppError::Unauthorized("invalid credentials".to_string()));
    }

    session::establish(
        &session,
        SessionUser {
            user_id: user.user_id,
            username: user.username.clone(),
            role: user.role,
        },
    )
    .await?;

    tracing::debug!(user_id = user.user_id, %username, "session established");

    Ok(Json(json!({
        "message": "logged in",
        "user_id": user.user_id,
        "role": user.role,
    })))
}

/// Destroy the current session. Requires authentication; the users and
/// guests rows are untouched.
pub async fn logout(session: Session) -> AppResult<Json<Value>> {
    session::destroy(&session).await?;

    Ok(Json(json!({
        "message": "logged out",
    })))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
