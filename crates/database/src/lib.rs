//! Athena Database Layer
//!
//! SQLite storage for the content cache, book metadata and per-user reading
//! state, using sqlx.

pub mod connection;
pub mod migrations;
pub mod queries;

pub use connection::{close, connect, connect_in_memory, DatabaseConfig, DbPool, IN_MEMORY_PATH};
pub use migrations::{current_version, run_migrations, verify_integrity};

/// Opens the database described by `config` and brings its schema up to date
pub async fn open(config: DatabaseConfig) -> Result<DbPool, athena_core::AppError> {
    let pool = connect(config).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use athena_core::{AppError, CacheRecord, Provenance};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_database_migrations() -> Result<(), AppError> {
        let pool = connect_in_memory().await?;
        run_migrations(&pool).await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM schema_migrations")
            .fetch_one(&pool)
            .await
            .map_err(|e| AppError::database("Failed to count migrations", e))?;

        assert_eq!(count, current_version());
        Ok(())
    }

    #[tokio::test]
    async fn test_cache_survives_reopen() -> Result<(), AppError> {
        let dir = TempDir::new().map_err(|e| AppError::database("tempdir", e))?;
        let path = dir.path().join("athena.db").to_string_lossy().to_string();

        let pool = open(DatabaseConfig::new(path.clone())).await?;
        let record = CacheRecord::new("9780141439518", "It is a truth", Provenance::CuratedCatalog);
        queries::upsert_content(&pool, &record).await?;
        close(pool).await;

        let pool = open(DatabaseConfig::new(path)).await?;
        let stored = queries::get_content(&pool, "9780141439518").await?;
        assert_eq!(stored, Some(record));
        close(pool).await;
        Ok(())
    }
}
