//! # Error Handling
//!
//! This module defines the application-wide error type and converts it into
//! HTTP responses.
//!
//! Every failure a handler can produce maps onto one variant here, and every
//! variant maps onto a status code plus a JSON body of the shape
//! `{"error": "message"}`. Handlers return [`AppResult`] and let the `?`
//! operator do the bookkeeping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-wide error type
///
/// The `#[from]` attribute on `Database` lets `?` convert `sqlx::Error`
/// directly, so database code stays free of explicit error mapping except
/// where a specific variant (e.g. `Conflict` on a unique-constraint
/// violation) is more precise.
#[derive(Error, Debug)]
pub enum AppError {
    /// Database errors (SQLx library errors)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Bad request errors (400)
    ///
    /// Used when the client omits a required field.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Conflict errors (409)
    ///
    /// Used when a registration collides with an existing username.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Authentication errors (401)
    ///
    /// Used when there is no valid session or the supplied credentials are
    /// wrong.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authorization errors (403)
    ///
    /// Used when the session is valid but the user's role does not grant
    /// access to the route.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Internal server errors (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Convert AppError into an HTTP response
///
/// Database errors are logged in full on the server and replaced with a
/// generic message so internals never leak to the caller. The remaining
/// variants carry messages that are safe to show.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Conflict(_) => (StatusCode::CONFLICT, self.to_string()),
            AppError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::Forbidden(_) => (StatusCode::FORBIDDEN, self.to_string()),
            AppError::Internal(_) => {
                tracing::error!("{}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;
