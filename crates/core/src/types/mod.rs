//! Domain types for Athena
//!
//! This module contains all domain models organized by responsibility:
//! - `identifier`: ISBN-10/13 canonicalization and check-digit validation
//! - `content`: fetched and normalized book text, dialects and provenance
//! - `catalog`: the curated identifier → catalog key table
//! - `book`: bibliographic metadata
//! - `bookmark`: per-user progress, bookmarks and highlights
//! - `user`: users and reading streaks
//! - `common`: shared utilities

mod book;
mod bookmark;
mod catalog;
mod common;
mod content;
mod identifier;
mod user;

// Re-export all public types
pub use book::BookMetadata;
pub use bookmark::{Bookmark, BookmarkId, Highlight, HighlightId, Progress};
pub use catalog::{CatalogEntry, CuratedCatalog};
pub use common::{Timestamp, Validator};
pub use content::{
    meets_length_floor, CacheRecord, Dialect, FetchedText, NormalizedContent, Provenance,
    RawFetchResult, MIN_HTML_TEXT_LEN, MIN_RAW_TEXT_LEN,
};
pub use identifier::{canonicalize, is_valid_identifier, BookIdentifier, IdentifierKind};
pub use user::{Streak, User};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_types_are_exported() {
        let _bookmark_id: BookmarkId = BookmarkId::new();
        let _highlight_id: HighlightId = HighlightId::new();
        let _catalog: CuratedCatalog = CuratedCatalog::builtin();
    }

    #[test]
    fn test_timestamp_ordering() {
        let t1 = Timestamp::now();
        std::thread::sleep(std::time::Duration::from_millis(10));
        let t2 = Timestamp::now();
        assert!(t2 > t1);
    }
}
