//! Highlight database operations

use crate::DbPool;
use athena_core::{AppError, Highlight, HighlightId, Timestamp};
use sqlx::Row;

pub async fn create_highlight(pool: &DbPool, highlight: &Highlight) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO highlights (id, user_email, identifier, text, color, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(highlight.id.as_string())
    .bind(&highlight.user_email)
    .bind(&highlight.identifier)
    .bind(&highlight.text)
    .bind(&highlight.color)
    .bind(highlight.created_at.as_millis())
    .execute(pool)
    .await
    .map_err(|e| AppError::database("Failed to create highlight", e))?;

    Ok(())
}

/// Gets a user's highlights in one book, oldest first
pub async fn list_highlights(
    pool: &DbPool,
    user_email: &str,
    identifier: &str,
    limit: u32,
) -> Result<Vec<Highlight>, AppError> {
    let rows = sqlx::query(
        r#"
        SELECT id, user_email, identifier, text, color, created_at
        FROM highlights
        WHERE user_email = ? AND identifier = ?
        ORDER BY created_at
        LIMIT ?
        "#,
    )
    .bind(user_email)
    .bind(identifier)
    .bind(i64::from(limit))
    .fetch_all(pool)
    .await
    .map_err(|e| AppError::database("Failed to list highlights", e))?;

    rows.into_iter().map(row_to_highlight).collect()
}

fn row_to_highlight(row: sqlx::sqlite::SqliteRow) -> Result<Highlight, AppError> {
    let id_str: String = row
        .try_get("id")
        .map_err(|e| AppError::database("Missing highlight ID", e))?;
    let id = HighlightId::from_string(&id_str)
        .map_err(|e| AppError::database("Invalid highlight ID", e))?;
    let created_at: i64 = row
        .try_get("created_at")
        .map_err(|e| AppError::database("Missing created_at", e))?;

    Ok(Highlight {
        id,
        user_email: row
            .try_get("user_email")
            .map_err(|e| AppError::database("Missing user_email", e))?,
        identifier: row
            .try_get("identifier")
            .map_err(|e| AppError::database("Missing identifier", e))?,
        text: row
            .try_get("text")
            .map_err(|e| AppError::database("Missing text", e))?,
        color: row
            .try_get("color")
            .map_err(|e| AppError::database("Missing color", e))?,
        created_at: Timestamp::from_millis(created_at),
    })
}
