//! Book metadata operations

use crate::DbPool;
use athena_core::{AppError, BookMetadata, Timestamp};
use sqlx::Row;

/// Inserts or replaces metadata for an identifier
pub async fn upsert_book(pool: &DbPool, book: &BookMetadata) -> Result<(), AppError> {
    let authors = serde_json::to_string(&book.authors)
        .map_err(|e| AppError::database("Failed to serialize authors", e))?;
    let subjects = serde_json::to_string(&book.subjects)
        .map_err(|e| AppError::database("Failed to serialize subjects", e))?;

    sqlx::query(
        r#"
        INSERT INTO books (
            identifier, title, authors, cover_url, publisher, publish_date,
            page_count, subjects, fetched_at
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(identifier) DO UPDATE SET
            title = excluded.title,
            authors = excluded.authors,
            cover_url = excluded.cover_url,
            publisher = excluded.publisher,
            publish_date = excluded.publish_date,
            page_count = excluded.page_count,
            subjects = excluded.subjects,
            fetched_at = excluded.fetched_at
        "#,
    )
    .bind(&book.identifier)
    .bind(&book.title)
    .bind(authors)
    .bind(&book.cover_url)
    .bind(&book.publisher)
    .bind(&book.publish_date)
    .bind(book.page_count.map(i64::from))
    .bind(subjects)
    .bind(book.fetched_at.as_millis())
    .execute(pool)
    .await
    .map_err(|e| AppError::database("Failed to store book metadata", e))?;

    Ok(())
}

/// Gets cached metadata for an identifier
pub async fn get_book(pool: &DbPool, identifier: &str) -> Result<Option<BookMetadata>, AppError> {
    let row = sqlx::query(
        r#"
        SELECT identifier, title, authors, cover_url, publisher, publish_date,
               page_count, subjects, fetched_at
        FROM books WHERE identifier = ?
        "#,
    )
    .bind(identifier)
    .fetch_optional(pool)
    .await
    .map_err(|e| AppError::database("Failed to fetch book metadata", e))?;

    row.map(row_to_book).transpose()
}

pub(crate) fn row_to_book(row: sqlx::sqlite::SqliteRow) -> Result<BookMetadata, AppError> {
    let authors: String = row
        .try_get("authors")
        .map_err(|e| AppError::database("Missing authors", e))?;
    let subjects: String = row
        .try_get("subjects")
        .map_err(|e| AppError::database("Missing subjects", e))?;
    let page_count: Option<i64> = row
        .try_get("page_count")
        .map_err(|e| AppError::database("Missing page_count", e))?;
    let fetched_at: i64 = row
        .try_get("fetched_at")
        .map_err(|e| AppError::database("Missing fetched_at", e))?;

    Ok(BookMetadata {
        identifier: row
            .try_get("identifier")
            .map_err(|e| AppError::database("Missing identifier", e))?,
        title: row
            .try_get("title")
            .map_err(|e| AppError::database("Missing title", e))?,
        authors: serde_json::from_str(&authors)
            .map_err(|e| AppError::database("Invalid authors", e))?,
        cover_url: row.try_get("cover_url").ok().flatten(),
        publisher: row.try_get("publisher").ok().flatten(),
        publish_date: row.try_get("publish_date").ok().flatten(),
        page_count: page_count.and_then(|n| u32::try_from(n).ok()),
        subjects: serde_json::from_str(&subjects)
            .map_err(|e| AppError::database("Invalid subjects", e))?,
        fetched_at: Timestamp::from_millis(fetched_at),
    })
}
