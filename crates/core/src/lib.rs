//! Athena core domain
//!
//! Shared error type and domain models used by every other crate in the
//! workspace: book identifiers, fetched/normalized content, the curated
//! catalog table and per-user reading state.

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use types::{
    canonicalize, is_valid_identifier, BookIdentifier, BookMetadata, Bookmark, BookmarkId,
    CacheRecord, CatalogEntry, CuratedCatalog, Dialect, FetchedText, Highlight, HighlightId,
    IdentifierKind, NormalizedContent, Progress, Provenance, RawFetchResult, Streak, Timestamp,
    User, Validator,
    meets_length_floor, MIN_HTML_TEXT_LEN, MIN_RAW_TEXT_LEN,
};
