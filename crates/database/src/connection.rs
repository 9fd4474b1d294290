//! SQLite pool setup
//!
//! The server opens one pool at startup and closes it on shutdown; every
//! query function borrows it.

use athena_core::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

pub type DbPool = Pool<Sqlite>;

/// Path value selecting a private in-memory database
pub const IN_MEMORY_PATH: &str = ":memory:";

/// How long a writer waits for a competing write lock
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite file, or [`IN_MEMORY_PATH`]
    pub path: String,
    pub max_connections: u32,
    pub enable_wal: bool,
    pub create_if_missing: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new("athena.db")
    }
}

impl DatabaseConfig {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            max_connections: 10,
            enable_wal: true,
            create_if_missing: true,
        }
    }

    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    pub fn with_wal(mut self, enable: bool) -> Self {
        self.enable_wal = enable;
        self
    }

    pub fn with_create_if_missing(mut self, create: bool) -> Self {
        self.create_if_missing = create;
        self
    }

    pub fn is_in_memory(&self) -> bool {
        self.path == IN_MEMORY_PATH
    }

    fn connect_options(&self) -> Result<SqliteConnectOptions, AppError> {
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", self.path))
            .map_err(|e| AppError::database(format!("Invalid database path {}", self.path), e))?
            .create_if_missing(self.create_if_missing)
            .busy_timeout(BUSY_TIMEOUT)
            .foreign_keys(true);

        Ok(if self.enable_wal {
            options
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
        } else {
            options
        })
    }
}

/// Opens a pool for `config`; the schema is not touched
pub async fn connect(config: DatabaseConfig) -> Result<DbPool, AppError> {
    if config.is_in_memory() {
        return connect_in_memory().await;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.connect_options()?)
        .await
        .map_err(|e| AppError::database(format!("Cannot open {}", config.path), e))?;

    log::info!(
        "Opened {} (up to {} connections, wal={})",
        config.path,
        config.max_connections,
        config.enable_wal
    );
    Ok(pool)
}

/// Opens a single-connection in-memory database
///
/// Each in-memory connection is its own database, so the pool never grows
/// past one connection.
pub async fn connect_in_memory() -> Result<DbPool, AppError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .map_err(|e| AppError::database("Invalid in-memory database URL", e))?
        .journal_mode(SqliteJournalMode::Memory)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(|e| AppError::database("Cannot open in-memory database", e))
}

pub async fn close(pool: DbPool) {
    pool.close().await;
}

pub fn database_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}
