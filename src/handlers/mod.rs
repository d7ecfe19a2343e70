//! # HTTP Request Handlers
//!
//! One submodule per surface:
//! - `health`: liveness probe
//! - `index`: greeting / welcome message at the root
//! - `auth`: register, login, logout
//! - `admin`: role-gated admin example route
//! - `guests`: role-gated guest profile route
//!
//! Handlers extract what they need (state, session, JSON body), call the
//! database and auth modules, and return `AppResult<Json<...>>` so failures
//! render as `{"error": message}` with the right status.

pub mod admin;
pub mod auth;
pub mod guests;
pub mod health;
pub mod index;
