//! Content cache operations
//!
//! One row per identifier. Writes are upserts, so concurrent resolutions of
//! the same identifier both succeed and the last write wins.

use crate::DbPool;
use athena_core::{AppError, CacheRecord, Provenance, Timestamp};
use sqlx::Row;

/// Gets the cached record for an identifier
pub async fn get_content(pool: &DbPool, identifier: &str) -> Result<Option<CacheRecord>, AppError> {
    let row = sqlx::query(
        "SELECT identifier, content, source, cached_at FROM book_contents WHERE identifier = ?",
    )
    .bind(identifier)
    .fetch_optional(pool)
    .await
    .map_err(|e| AppError::database("Failed to fetch cached content", e))?;

    row.map(row_to_record).transpose()
}

/// Inserts or replaces the cached record for an identifier
pub async fn upsert_content(pool: &DbPool, record: &CacheRecord) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO book_contents (identifier, content, source, cached_at)
        VALUES (?, ?, ?, ?)
        ON CONFLICT(identifier) DO UPDATE SET
            content = excluded.content,
            source = excluded.source,
            cached_at = excluded.cached_at
        "#,
    )
    .bind(&record.identifier)
    .bind(&record.content)
    .bind(record.source.as_str())
    .bind(record.cached_at.as_millis())
    .execute(pool)
    .await
    .map_err(|e| AppError::database("Failed to write cached content", e))?;

    Ok(())
}

/// Number of cached records
pub async fn count_contents(pool: &DbPool) -> Result<i64, AppError> {
    sqlx::query_scalar("SELECT COUNT(*) FROM book_contents")
        .fetch_one(pool)
        .await
        .map_err(|e| AppError::database("Failed to count cached content", e))
}

fn row_to_record(row: sqlx::sqlite::SqliteRow) -> Result<CacheRecord, AppError> {
    let source: String = row
        .try_get("source")
        .map_err(|e| AppError::database("Missing source", e))?;
    let source = source.parse::<Provenance>().map_err(|reason| AppError::DatabaseError {
        message: format!("Invalid cached source: {}", reason),
        source: None,
    })?;
    let cached_at: i64 = row
        .try_get("cached_at")
        .map_err(|e| AppError::database("Missing cached_at", e))?;

    Ok(CacheRecord {
        identifier: row
            .try_get("identifier")
            .map_err(|e| AppError::database("Missing identifier", e))?,
        content: row
            .try_get("content")
            .map_err(|e| AppError::database("Missing content", e))?,
        source,
        cached_at: Timestamp::from_millis(cached_at),
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
    async fn test_missing_record() {
        let pool = setup().await;
        assert!(get_content(&pool, "9780141439518").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_upsert_and_get() {
        let pool = setup().await;
        let record = CacheRecord::new("9780141439518", "It is a truth", Provenance::CuratedCatalog);
        upsert_content(&pool, &record).await.unwrap();

        let stored = get_content(&pool, "9780141439518").await.unwrap().unwrap();
        assert_eq!(stored, record);
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let pool = setup().await;
        upsert_content(&pool, &CacheRecord::new("id", "first", Provenance::CuratedCatalog))
            .await
            .unwrap();
        upsert_content(&pool, &CacheRecord::new("id", "second", Provenance::MetadataArchive))
            .await
            .unwrap();

        let stored = get_content(&pool, "id").await.unwrap().unwrap();
        assert_eq!(stored.content, "second");
        assert_eq!(stored.source, Provenance::MetadataArchive);
        assert_eq!(count_contents(&pool).await.unwrap(), 1);
    }
}
