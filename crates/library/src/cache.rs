//! Content cache abstraction
//!
//! The resolver only needs get and put. [`SqliteContentCache`] backs it with
//! the `book_contents` table.

use athena_core::{AppError, CacheRecord, Timestamp};
use athena_database::{queries, DbPool};
use async_trait::async_trait;

/// Persistent identifier → normalized content store
#[async_trait]
pub trait ContentCache: Send + Sync {
    /// Returns the live record for `identifier`, if any
    async fn get(&self, identifier: &str) -> Result<Option<CacheRecord>, AppError>;

    /// Inserts or replaces the record for its identifier
    async fn put(&self, record: &CacheRecord) -> Result<(), AppError>;
}

/// Content cache stored in SQLite
#[derive(Clone)]
pub struct SqliteContentCache {
    pool: DbPool,
    max_age_days: Option<u32>,
}

impl SqliteContentCache {
    /// Cache whose records never expire
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            max_age_days: None,
        }
    }

    /// Treats records older than `days` as missing
    pub fn with_max_age_days(mut self, days: Option<u32>) -> Self {
        self.max_age_days = days;
        self
    }

    fn is_stale(&self, record: &CacheRecord, now: Timestamp) -> bool {
        match self.max_age_days {
            Some(days) => record.cached_at.days_until(now) >= i64::from(days),
            None => false,
        }
    }
}

#[async_trait]
impl ContentCache for SqliteContentCache {
    async fn get(&self, identifier: &str) -> Result<Option<CacheRecord>, AppError> {
        let record = queries::get_content(&self.pool, identifier).await?;
        Ok(record.filter(|r| {
            let stale = self.is_stale(r, Timestamp::now());
            if stale {
                log::debug!("Cached content for {} is stale", identifier);
            }
            !stale
        }))
    }

    async fn put(&self, record: &CacheRecord) -> Result<(), AppError> {
        queries::upsert_content(&self.pool, record).await
    }
}
