//! # Database Models
//!
//! Row types mapping onto the `users` and `guests` tables, plus the `Role`
//! enum gating protected routes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse-grained capability label attached to every user.
///
/// Stored as lowercase TEXT in the `role` column and serialized as a
/// lowercase JSON string, so `Role::Guest` round-trips as `"guest"` in both
/// the database and API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    Guest,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Guest => "guest",
            Role::Admin => "admin",
        })
    }
}

/// A row in the `users` table.
///
/// `password` holds either an Argon2 PHC-format hash or, for accounts
/// predating hashing, the legacy plaintext value. It is never serialized
/// into a response; the struct deliberately does not derive `Serialize`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// A row in the `guests` table, one-to-one with a guest-role user.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Guest {
    pub user_id: i64,
    pub name: String,
}
