//! # Health Check Handler
//!
//! Simple endpoint used by load balancers and monitoring systems.

use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// Health check endpoint
///
/// ## Route
/// GET /health
///
/// ## Response
/// ```json
/// {
///   "status": "ok",
///   "time": "2024-01-15T10:30:00+00:00"
/// }
/// ```
///
/// Never fails, so it returns `Json<Value>` directly instead of `AppResult`.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "time": Utc::now().to_rfc3339(),
    }))
}
