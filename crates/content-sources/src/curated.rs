// FILE: src/curated.rs

use crate::{ContentSource, PlainTextArchive, SourceMetadata, SourceRequest, SourceResult};
use athena_core::{CuratedCatalog, Provenance, FetchedText};
use async_trait::async_trait;
use std::sync::Arc;

/// Fetches curated identifiers from the plain-text archive by catalog key
pub struct CuratedCatalogSource {
    catalog: Arc<CuratedCatalog>,
    archive: PlainTextArchive,
}

impl CuratedCatalogSource {
    pub fn new(catalog: Arc<CuratedCatalog>, archive: PlainTextArchive) -> Self {
        Self { catalog, archive }
    }
}

#[async_trait]
impl ContentSource for CuratedCatalogSource {
    async fn fetch(&self, request: &SourceRequest) -> SourceResult<Option<FetchedText>> {
        let Some(key) = self.catalog.lookup(&request.identifier) else {
            log::debug!("{} is not in the curated catalog", request.identifier);
            return Ok(None);
        };

        log::debug!("{} is curated as catalog key {}", request.identifier, key);
        self.archive.fetch_book(key, Provenance::CuratedCatalog).await
    }

    fn provenance(&self) -> Provenance {
        Provenance::CuratedCatalog
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "Curated catalog".to_string(),
            description: format!("{} curated public-domain editions", self.catalog.len()),
            base_url: String::new(),
        }
    }
}
