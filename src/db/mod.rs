//! # Database Module
//!
//! All database-related code, organized per table:
//! - `models`: Row types (`User`, `Guest`) and the `Role` enum
//! - `users`: Operations on the `users` table
//! - `guests`: Operations on the `guests` table
//!
//! Reads take the pool directly; writes take a `&mut SqliteConnection` so
//! they compose into a transaction when a handler needs multi-statement
//! atomicity (registration creates a user and a guest row together).

pub mod guests;
pub mod models;
pub mod users;
