// FILE: src/traits.rs

use crate::openlibrary::EditionDetails;
use crate::SourceResult;
use athena_core::{Provenance, FetchedText};
use async_trait::async_trait;

/// A source of normalized book text
///
/// `Ok(None)` means the source has nothing for the request; `Err` means the
/// source could not be consulted. Callers treat both as a miss.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch normalized text for a request
    async fn fetch(&self, request: &SourceRequest) -> SourceResult<Option<FetchedText>>;

    /// Provenance tag attached to content from this source
    fn provenance(&self) -> Provenance;

    /// Get metadata about the source
    fn metadata(&self) -> SourceMetadata;
}

/// Input to a source fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRequest {
    /// Canonical (or opaque) identifier
    pub identifier: String,
    /// Edition details from the metadata API, when the lookup found any
    pub details: Option<EditionDetails>,
}

impl SourceRequest {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Option<EditionDetails>) -> Self {
        self.details = details;
        self
    }
}

/// Source metadata
#[derive(Debug, Clone)]
pub struct SourceMetadata {
    pub name: String,
    pub description: String,
    pub base_url: String,
}
