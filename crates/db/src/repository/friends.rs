//! Friend CRUD operations.

use sqlx::SqliteConnection;

use crate::{
    DbError,
    models::{Friend, FriendFields},
};

/// Insert a new friend and return the stored row, including its generated id.
pub async fn create_friend(
    conn: &mut SqliteConnection,
    fields: &FriendFields,
) -> Result<Friend, DbError> {
    let row = sqlx::query_as::<_, Friend>(
        r#"
        INSERT INTO friend (first_name, last_name, age)
        VALUES ($1, $2, $3)
        RETURNING id, first_name, last_name, age
        "#,
    )
    .bind(&fields.first_name)
    .bind(&fields.last_name)
    .bind(fields.age)
    .fetch_one(conn)
    .await?;

    Ok(row)
}

/// Fetch a single friend by its primary key, or `None` if no such row exists.
pub async fn get_friend(conn: &mut SqliteConnection, id: i64) -> Result<Option<Friend>, DbError> {
    let row = sqlx::query_as::<_, Friend>(
        r#"SELECT id, first_name, last_name, age FROM friend WHERE id = $1"#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;

    Ok(row)
}

/// Return every friend row.
pub async fn list_friends(conn: &mut SqliteConnection) -> Result<Vec<Friend>, DbError> {
    let rows = sqlx::query_as::<_, Friend>(
        r#"SELECT id, first_name, last_name, age FROM friend ORDER BY id"#,
    )
    .fetch_all(conn)
    .await?;

    Ok(rows)
}

/// Overwrite all writable fields of an existing friend and return the new row.
///
/// Returns `DbError::NotFound(id)` if no row has the given id.
pub async fn update_friend(
    conn: &mut SqliteConnection,
    id: i64,
    fields: &FriendFields,
) -> Result<Friend, DbError> {
    let row = sqlx::query_as::<_, Friend>(
        r#"
        UPDATE friend
        SET first_name = $1, last_name = $2, age = $3
        WHERE id = $4
        RETURNING id, first_name, last_name, age
        "#,
    )
    .bind(&fields.first_name)
    .bind(&fields.last_name)
    .bind(fields.age)
    .bind(id)
    .fetch_optional(conn)
    .await?
    .ok_or(DbError::NotFound(id))?;

    Ok(row)
}

/// Permanently delete a friend by its primary key.
///
/// Returns `DbError::NotFound(id)` if no row was deleted.
pub async fn delete_friend(conn: &mut SqliteConnection, id: i64) -> Result<(), DbError> {
    let result = sqlx::query("DELETE FROM friend WHERE id = $1")
        .bind(id)
        .execute(conn)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound(id));
    }

    Ok(())
}
