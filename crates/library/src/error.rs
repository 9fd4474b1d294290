// FILE: crates/library/src/error.rs

use athena_content_sources::SourceError;
use athena_core::AppError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("Content source error: {0}")]
    Source(#[from] SourceError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A spawned resolution task panicked or was cancelled
    #[error("Background task failed: {0}")]
    Task(String),
}

impl LibraryError {
    /// Returns true if the caller sent an unusable request
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            LibraryError::App(AppError::InvalidIdentifier { .. } | AppError::InvalidArgument { .. })
                | LibraryError::InvalidInput(_)
                | LibraryError::Source(SourceError::InvalidQuery(_))
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LibraryError::NotFound(_) | LibraryError::App(AppError::RecordNotFound { .. })
        )
    }
}

pub type LibraryResult<T> = std::result::Result<T, LibraryError>;
