use crate::db::models::Guest;
use crate::error::AppResult;
use sqlx::{SqliteConnection, SqlitePool};

pub async fn create(conn: &mut SqliteConnection, user_id: i64, name: &str) -> AppResult<()> {
    sqlx::query("INSERT INTO guests (user_id, name) VALUES (?, ?)")
        .bind(user_id)
        .bind(name)
        .execute(&mut *conn)
        .await?;

    Ok(())
}

pub async fn find_by_user_id(pool: &SqlitePool, user_id: i64) -> AppResult<Option<Guest>> {
    let guest = sqlx::query_as::<_, Guest>("SELECT * FROM guests WHERE user_id = ?")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(guest)
}
