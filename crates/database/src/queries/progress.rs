//! Reading progress operations

use crate::queries::books::row_to_book;
use crate::DbPool;
use athena_core::{AppError, BookMetadata, Progress, Timestamp};
use sqlx::Row;

/// Saves progress, overwriting any previous position for the same book
pub async fn upsert_progress(pool: &DbPool, progress: &Progress) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO progress (user_email, identifier, position, last_updated)
        VALUES (?, ?, ?, ?)
        ON CONFLICT(user_email, identifier) DO UPDATE SET
            position = excluded.position,
            last_updated = excluded.last_updated
        "#,
    )
    .bind(&progress.user_email)
    .bind(&progress.identifier)
    .bind(progress.position)
    .bind(progress.last_updated.as_millis())
    .execute(pool)
    .await
    .map_err(|e| AppError::database("Failed to save progress", e))?;

    Ok(())
}

/// Gets a user's progress in one book
pub async fn get_progress(
    pool: &DbPool,
    user_email: &str,
    identifier: &str,
) -> Result<Option<Progress>, AppError> {
    let row = sqlx::query(
        r#"
        SELECT user_email, identifier, position, last_updated
        FROM progress WHERE user_email = ? AND identifier = ?
        "#,
    )
    .bind(user_email)
    .bind(identifier)
    .fetch_optional(pool)
    .await
    .map_err(|e| AppError::database("Failed to fetch progress", e))?;

    row.map(|r| row_to_progress(&r)).transpose()
}

/// Most recently read books that have cached metadata, newest first
pub async fn list_library(
    pool: &DbPool,
    user_email: &str,
    limit: u32,
) -> Result<Vec<(Progress, BookMetadata)>, AppError> {
    let rows = sqlx::query(
        r#"
        SELECT p.user_email, p.identifier, p.position, p.last_updated,
               b.title, b.authors, b.cover_url, b.publisher, b.publish_date,
               b.page_count, b.subjects, b.fetched_at
        FROM progress p
        INNER JOIN books b ON b.identifier = p.identifier
        WHERE p.user_email = ?
        ORDER BY p.last_updated DESC
        LIMIT ?
        "#,
    )
    .bind(user_email)
    .bind(i64::from(limit))
    .fetch_all(pool)
    .await
    .map_err(|e| AppError::database("Failed to list library", e))?;

    rows.into_iter()
        .map(|row| {
            let progress = row_to_progress(&row)?;
            let book = row_to_book(row)?;
            Ok((progress, book))
        })
        .collect()
}

fn row_to_progress(row: &sqlx::sqlite::SqliteRow) -> Result<Progress, AppError> {
    let last_updated: i64 = row
        .try_get("last_updated")
        .map_err(|e| AppError::database("Missing last_updated", e))?;

    Ok(Progress {
        user_email: row
            .try_get("user_email")
            .map_err(|e| AppError::database("Missing user_email", e))?,
        identifier: row
            .try_get("identifier")
            .map_err(|e| AppError::database("Missing identifier", e))?,
        position: row
            .try_get("position")
            .map_err(|e| AppError::database("Missing position", e))?,
        last_updated: Timestamp::from_millis(last_updated),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::connect_in_memory;
    use crate::migrations::run_migrations;
    use crate::queries::books::upsert_book;

    async fn setup() -> DbPool {
        let pool = connect_in_memory().await.unwrap();
        run_migrations(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn test_progress_overwrites() {
        let pool = setup().await;
        upsert_progress(&pool, &Progress::new("a@b.c", "book", 10.0)).await.unwrap();
        upsert_progress(&pool, &Progress::new("a@b.c", "book", 55.5)).await.unwrap();

        let stored = get_progress(&pool, "a@b.c", "book").await.unwrap().unwrap();
        assert_eq!(stored.position, 55.5);
        assert!(get_progress(&pool, "x@y.z", "book").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_library_requires_metadata() {
        let pool = setup().await;
        upsert_book(&pool, &BookMetadata::new("known", "Known Book")).await.unwrap();

        let mut older = Progress::new("a@b.c", "known", 1.0);
        older.last_updated = Timestamp::from_millis(1_000);
        upsert_progress(&pool, &older).await.unwrap();
        upsert_progress(&pool, &Progress::new("a@b.c", "unknown", 2.0)).await.unwrap();

        let library = list_library(&pool, "a@b.c", 100).await.unwrap();
        assert_eq!(library.len(), 1);
        assert_eq!(library[0].0.identifier, "known");
        assert_eq!(library[0].1.title, "Known Book");
    }

    #[tokio::test]
    async fn test_library_newest_first_and_limited() {
        let pool = setup().await;
        for (i, id) in ["one", "two", "three"].iter().enumerate() {
            upsert_book(&pool, &BookMetadata::new(*id, *id)).await.unwrap();
            let mut progress = Progress::new("a@b.c", *id, 0.0);
            progress.last_updated = Timestamp::from_millis(i as i64 * 1000);
            upsert_progress(&pool, &progress).await.unwrap();
        }

        let library = list_library(&pool, "a@b.c", 2).await.unwrap();
        let ids: Vec<_> = library.iter().map(|(p, _)| p.identifier.as_str()).collect();
        assert_eq!(ids, vec!["three", "two"]);
    }
}
