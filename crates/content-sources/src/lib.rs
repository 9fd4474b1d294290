// FILE: crates/content-sources/src/lib.rs

mod archive;
mod candidate;
mod curated;
mod endpoints;
mod fixtures;
mod gutendex;
mod openlibrary;
mod plain_text;
mod traits;

pub use archive::MetadataArchiveSource;
pub use curated::CuratedCatalogSource;
pub use endpoints::SourceEndpoints;
pub use fixtures::FixtureTable;
pub use gutendex::{CatalogSearch, CatalogSearchHit, SearchFallbackSource, MAX_CATALOG_RESULTS};
pub use openlibrary::{EditionDetails, MetadataClient};
pub use plain_text::PlainTextArchive;
use std::fmt;
pub use traits::{ContentSource, SourceMetadata, SourceRequest};

use athena_network::NetworkError;

/// Result type for content source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors from content sources
#[derive(Debug, Clone, PartialEq)]
pub enum SourceError {
    /// Network error
    NetworkError(String),
    /// Parse error
    ParseError(String),
    /// Not found
    NotFound,
    /// Invalid query
    InvalidQuery(String),
    /// Source unavailable
    Unavailable(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::NetworkError(e) => write!(f, "Network error: {}", e),
            SourceError::ParseError(e) => write!(f, "Parse error: {}", e),
            SourceError::NotFound => write!(f, "Not found"),
            SourceError::InvalidQuery(e) => write!(f, "Invalid query: {}", e),
            SourceError::Unavailable(e) => write!(f, "Source unavailable: {}", e),
        }
    }
}

impl std::error::Error for SourceError {}

impl From<NetworkError> for SourceError {
    fn from(err: NetworkError) -> Self {
        match err {
            NetworkError::Status { status: 404, .. } => SourceError::NotFound,
            NetworkError::InvalidBody { reason, .. } => SourceError::ParseError(reason),
            NetworkError::InvalidUrl(url) => SourceError::InvalidQuery(url),
            other => SourceError::NetworkError(other.to_string()),
        }
    }
}
