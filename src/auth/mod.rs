//! # Authentication Module
//!
//! Credential verification and server-side session state:
//! - `password`: one-way salted hashing and verification (Argon2id), with a
//!   legacy plaintext comparison fallback for pre-existing accounts
//! - `session`: the `{user_id, username, role}` record kept server-side and
//!   resolved from the session-id cookie on each request

pub mod password;
pub mod session;
