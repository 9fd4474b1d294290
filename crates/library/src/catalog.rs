//! Direct access to the public-domain catalog by key and by keyword

use crate::cache::ContentCache;
use crate::error::{LibraryError, LibraryResult};
use athena_content_sources::{CatalogSearch, CatalogSearchHit, PlainTextArchive, SourceEndpoints};
use athena_core::{CacheRecord, NormalizedContent, Provenance};
use athena_network::HttpFetch;
use std::sync::Arc;

/// Cache key for text fetched by catalog key
pub fn catalog_cache_key(catalog_id: u32) -> String {
    format!("catalog_{}", catalog_id)
}

pub struct CatalogService {
    cache: Arc<dyn ContentCache>,
    archive: PlainTextArchive,
    search: CatalogSearch,
}

impl CatalogService {
    pub fn new(
        cache: Arc<dyn ContentCache>,
        fetcher: Arc<dyn HttpFetch>,
        endpoints: Arc<SourceEndpoints>,
    ) -> Self {
        Self {
            cache,
            archive: PlainTextArchive::new(fetcher.clone(), endpoints.clone()),
            search: CatalogSearch::new(fetcher, endpoints),
        }
    }

    /// Keyword search, at most ten hits
    pub async fn search(&self, query: &str) -> LibraryResult<Vec<CatalogSearchHit>> {
        Ok(self.search.search(query).await?)
    }

    /// Normalized text for a catalog key, cached under `catalog_{id}`
    ///
    /// Fails with [`LibraryError::NotFound`] when the archive has no usable text.
    pub async fn fetch_text(&self, catalog_id: u32) -> LibraryResult<NormalizedContent> {
        let key = catalog_cache_key(catalog_id);

        match self.cache.get(&key).await {
            Ok(Some(record)) => return Ok(record.into_content()),
            Ok(None) => {}
            Err(e) => log::warn!("Cache read failed for {}: {}", key, e),
        }

        let fetched = match self.archive.fetch_book(catalog_id, Provenance::CuratedCatalog).await {
            Ok(Some(fetched)) => fetched,
            Ok(None) => return Err(LibraryError::NotFound(key)),
            Err(e) => {
                log::warn!("Catalog fetch failed for {}: {}", catalog_id, e);
                return Err(LibraryError::NotFound(key));
            }
        };

        let content = NormalizedContent::new(key, fetched.text, Provenance::CuratedCatalog);
        if let Err(e) = self.cache.put(&CacheRecord::from_content(&content)).await {
            log::warn!("Failed to cache {}: {}", content.identifier, e);
        }
        Ok(content)
    }
}
