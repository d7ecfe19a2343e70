use crate::db::models::{Role, User};
use crate::error::{AppError, AppResult};
use sqlx::{SqliteConnection, SqlitePool};

/// Insert a new user row and return its generated id.
///
/// A unique-constraint violation on `username` maps to `Conflict` so that
/// two concurrent registrations of the same name can't both pass the
/// handler's existence pre-check and then surface a 500.
pub async fn create(
    conn: &mut SqliteConnection,
    username: &str,
    password: &str,
    role: Role,
) -> AppResult<i64> {
    let result = sqlx::query("INSERT INTO users (username, password, role) VALUES (?, ?, ?)")
        .bind(username)
        .bind(password)
        .bind(role)
        .execute(&mut *conn)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict("username already exists".to_string())
            }
            _ => AppError::Database(e),
        })?;

    Ok(result.last_insert_rowid())
}

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> AppResult<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}
