//! # Password hashing and verification — Argon2id
//!
//! [`hash`] generates a random salt via [`OsRng`] and hashes the plaintext
//! with the default Argon2id parameters, returning a PHC-format string
//! (e.g. `$argon2id$v=19$m=19456,t=2,p=1$...`) for the `password` column.
//!
//! [`verify`] parses the stored value as a PHC string and checks the
//! supplied plaintext against it. Stored values that are not valid PHC
//! strings are legacy plaintext passwords; for those the comparison falls
//! back to direct equality.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{AppError, AppResult};

/// Hash a password using Argon2id. Returns a PHC-format string.
pub fn hash(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;

    Ok(hash.to_string())
}

/// Check a supplied password against the stored column value.
///
/// A stored value that does not parse as a PHC hash predates hashing and is
/// compared directly.
pub fn verify(stored: &str, supplied: &str) -> bool {
    match PasswordHash::new(stored) {
        Ok(parsed) => Argon2::default()
            .verify_password(supplied.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => stored == supplied,
    }
}
