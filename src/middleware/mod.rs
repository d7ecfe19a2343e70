//! # Middleware Module
//!
//! Request guards that run before protected handlers:
//! - `auth`: session authentication and role checks

pub mod auth;
