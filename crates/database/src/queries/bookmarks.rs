//! Bookmark database operations

use crate::DbPool;
use athena_core::{AppError, Bookmark, BookmarkId, Timestamp};
use sqlx::Row;

/// Creates a new bookmark
pub async fn create_bookmark(pool: &DbPool, bookmark: &Bookmark) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO bookmarks (id, user_email, identifier, position, text, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(bookmark.id.as_string())
    .bind(&bookmark.user_email)
    .bind(&bookmark.identifier)
    .bind(bookmark.position)
    .bind(&bookmark.text)
    .bind(bookmark.created_at.as_millis())
    .execute(pool)
    .await
    .map_err(|e| AppError::database("Failed to create bookmark", e))?;

    Ok(())
}

/// Gets a user's bookmarks in one book, ordered by position
pub async fn list_bookmarks(
    pool: &DbPool,
    user_email: &str,
    identifier: &str,
    limit: u32,
) -> Result<Vec<Bookmark>, AppError> {
    let rows = sqlx::query(
        r#"
        SELECT id, user_email, identifier, position, text, created_at
        FROM bookmarks
        WHERE user_email = ? AND identifier = ?
        ORDER BY position
        LIMIT ?
        "#,
    )
    .bind(user_email)
    .bind(identifier)
    .bind(i64::from(limit))
    .fetch_all(pool)
    .await
    .map_err(|e| AppError::database("Failed to list bookmarks", e))?;

    rows.into_iter().map(row_to_bookmark).collect()
}

/// Deletes the user's bookmarks at `position`; returns how many were removed
pub async fn delete_bookmarks_at(
    pool: &DbPool,
    user_email: &str,
    identifier: &str,
    position: f64,
) -> Result<u64, AppError> {
    let result = sqlx::query(
        "DELETE FROM bookmarks WHERE user_email = ? AND identifier = ? AND position = ?",
    )
    .bind(user_email)
    .bind(identifier)
    .bind(position)
    .execute(pool)
    .await
    .map_err(|e| AppError::database("Failed to delete bookmark", e))?;

    Ok(result.rows_affected())
}

pub(crate) fn row_to_bookmark(row: sqlx::sqlite::SqliteRow) -> Result<Bookmark, AppError> {
    let id_str: String = row
        .try_get("id")
        .map_err(|e| AppError::database("Missing bookmark ID", e))?;
    let id = BookmarkId::from_string(&id_str)
        .map_err(|e| AppError::database("Invalid bookmark ID", e))?;

    let created_at: i64 = row
        .try_get("created_at")
        .map_err(|e| AppError::database("Missing created_at", e))?;

    Ok(Bookmark {
        id,
        user_email: row
            .try_get("user_email")
            .map_err(|e| AppError::database("Missing user_email", e))?,
        identifier: row
            .try_get("identifier")
            .map_err(|e| AppError::database("Missing identifier", e))?,
        position: row
            .try_get("position")
            .map_err(|e| AppError::database("Missing position", e))?,
        text: row
            .try_get("text")
            .map_err(|e| AppError::database("Missing text", e))?,
        created_at: Timestamp::from_millis(created_at),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::connect_in_memory;
    use crate::migrations::run_migrations;

    async fn setup() -> DbPool {
        let pool = connect_in_memory().await.unwrap();
        run_migrations(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn test_create_and_list_ordered() {
        let pool = setup().await;
        for position in [300.0, 10.0, 150.0] {
            create_bookmark(&pool, &Bookmark::new("a@b.c", "book", position, "mark"))
                .await
                .unwrap();
        }

        let marks = list_bookmarks(&pool, "a@b.c", "book", 100).await.unwrap();
        let positions: Vec<f64> = marks.iter().map(|b| b.position).collect();
        assert_eq!(positions, vec![10.0, 150.0, 300.0]);
    }

    #[tokio::test]
    async fn test_list_is_scoped_to_user() {
        let pool = setup().await;
        create_bookmark(&pool, &Bookmark::new("a@b.c", "book", 1.0, "mine"))
            .await
            .unwrap();
        assert!(list_bookmarks(&pool, "x@y.z", "book", 100)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_delete_at_position() {
        let pool = setup().await;
        create_bookmark(&pool, &Bookmark::new("a@b.c", "book", 42.0, "one"))
            .await
            .unwrap();
        create_bookmark(&pool, &Bookmark::new("a@b.c", "book", 43.0, "two"))
            .await
            .unwrap();

        assert_eq!(delete_bookmarks_at(&pool, "a@b.c", "book", 42.0).await.unwrap(), 1);
        assert_eq!(delete_bookmarks_at(&pool, "a@b.c", "book", 42.0).await.unwrap(), 0);
        assert_eq!(list_bookmarks(&pool, "a@b.c", "book", 100).await.unwrap().len(), 1);
    }
}
