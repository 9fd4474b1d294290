//! Fixed-order full-text resolution
//!
//! cache → curated catalog → fixtures → metadata archive → search fallback →
//! unavailable. Every source failure is a miss; the pipeline itself only
//! fails when the identifier is rejected.

use crate::cache::ContentCache;
use crate::error::{LibraryError, LibraryResult};
use athena_config::ResolutionConfig;
use athena_content_sources::{
    CatalogSearch, ContentSource, CuratedCatalogSource, EditionDetails, FixtureTable,
    MetadataArchiveSource, MetadataClient, PlainTextArchive, SearchFallbackSource,
    SourceEndpoints, SourceRequest,
};
use athena_core::{
    canonicalize, AppError, BookIdentifier, CacheRecord, CuratedCatalog,
    NormalizedContent, Provenance,
};
use athena_network::HttpFetch;
use std::sync::Arc;

/// Text served when no source has the book
pub const UNAVAILABLE_MESSAGE: &str = "This book's full text is not available in our database. \
We currently support public domain books from Internet Archive. Please try another ISBN or \
check if this book is available in public domain.";

/// Resolution policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Treat identifiers failing check-digit validation as opaque keys
    pub allow_unvalidated_identifiers: bool,
    pub enable_fixtures: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            allow_unvalidated_identifiers: true,
            enable_fixtures: true,
        }
    }
}

impl From<&ResolutionConfig> for ResolverOptions {
    fn from(config: &ResolutionConfig) -> Self {
        Self {
            allow_unvalidated_identifiers: config.allow_unvalidated_identifiers,
            enable_fixtures: config.enable_fixtures,
        }
    }
}

/// Resolves an identifier to normalized full text
pub struct ContentResolver {
    cache: Arc<dyn ContentCache>,
    curated: CuratedCatalogSource,
    fixtures: FixtureTable,
    metadata: MetadataClient,
    archive: MetadataArchiveSource,
    fallback: SearchFallbackSource,
    options: ResolverOptions,
}

impl ContentResolver {
    pub fn new(
        cache: Arc<dyn ContentCache>,
        fetcher: Arc<dyn HttpFetch>,
        endpoints: Arc<SourceEndpoints>,
        catalog: Arc<CuratedCatalog>,
        options: ResolverOptions,
    ) -> Self {
        let plain_text = PlainTextArchive::new(fetcher.clone(), endpoints.clone());
        let search = CatalogSearch::new(fetcher.clone(), endpoints.clone());

        Self {
            cache,
            curated: CuratedCatalogSource::new(catalog, plain_text.clone()),
            fixtures: if options.enable_fixtures {
                FixtureTable::builtin()
            } else {
                FixtureTable::empty()
            },
            metadata: MetadataClient::new(fetcher.clone(), endpoints.clone()),
            archive: MetadataArchiveSource::new(fetcher, endpoints),
            fallback: SearchFallbackSource::new(search, plain_text),
            options,
        }
    }

    pub fn options(&self) -> ResolverOptions {
        self.options
    }

    /// Runs the pipeline for a raw identifier
    ///
    /// Returns `Err` only when the identifier is rejected. Exhausting every
    /// source yields [`Provenance::Unavailable`] content, which is not cached.
    pub async fn resolve(&self, raw: &str) -> LibraryResult<NormalizedContent> {
        let identifier = self.accept_identifier(raw)?;

        if let Some(content) = self.from_cache(&identifier).await {
            return Ok(content);
        }

        let request = SourceRequest::new(identifier.as_str());
        if let Some(content) = self.try_source(&self.curated, &request).await {
            return Ok(content);
        }

        if let Some(text) = self.fixtures.lookup(&identifier) {
            log::info!("Serving sample text for {}", identifier);
            return Ok(NormalizedContent::new(identifier, text, Provenance::Fixture));
        }

        let request = request.with_details(self.lookup_details(&identifier).await);
        if let Some(content) = self.try_source(&self.archive, &request).await {
            return Ok(content);
        }
        if let Some(content) = self.try_source(&self.fallback, &request).await {
            return Ok(content);
        }

        log::info!("No source has full text for {}", identifier);
        Ok(NormalizedContent::new(
            identifier,
            UNAVAILABLE_MESSAGE,
            Provenance::Unavailable,
        ))
    }

    /// Runs [`resolve`](Self::resolve) on its own task
    ///
    /// The resolution and its cache write finish even if the caller goes away.
    pub async fn resolve_spawned(self: &Arc<Self>, raw: String) -> LibraryResult<NormalizedContent> {
        let resolver = Arc::clone(self);
        tokio::spawn(async move { resolver.resolve(&raw).await })
            .await
            .map_err(|e| LibraryError::Task(e.to_string()))?
    }

    fn accept_identifier(&self, raw: &str) -> LibraryResult<String> {
        let canonical = canonicalize(raw);
        if canonical.is_empty() {
            return Err(AppError::invalid_identifier(raw, "identifier is empty").into());
        }

        match BookIdentifier::parse(&canonical) {
            Ok(id) => Ok(id.to_string()),
            Err(e) if self.options.allow_unvalidated_identifiers => {
                log::debug!("Resolving {} as an opaque key: {}", canonical, e);
                Ok(canonical)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn from_cache(&self, identifier: &str) -> Option<NormalizedContent> {
        match self.cache.get(identifier).await {
            Ok(Some(record)) => {
                log::debug!("Cache hit for {}", identifier);
                Some(record.into_content())
            }
            Ok(None) => None,
            Err(e) => {
                log::warn!("Cache read failed for {}: {}", identifier, e);
                None
            }
        }
    }

    async fn lookup_details(&self, identifier: &str) -> Option<EditionDetails> {
        match self.metadata.lookup_details(identifier).await {
            Ok(details) => details,
            Err(e) => {
                log::warn!("Edition lookup failed for {}: {}", identifier, e);
                None
            }
        }
    }

    /// Fetches and caches from one source; `None` on any miss
    async fn try_source(
        &self,
        source: &dyn ContentSource,
        request: &SourceRequest,
    ) -> Option<NormalizedContent> {
        let name = source.metadata().name;
        let fetched = match source.fetch(request).await {
            Ok(Some(fetched)) => fetched,
            Ok(None) => {
                log::debug!("{}: no text for {}", name, request.identifier);
                return None;
            }
            Err(e) => {
                log::warn!("{} unavailable for {}: {}", name, request.identifier, e);
                return None;
            }
        };

        log::debug!("{}: {} text from {}", name, fetched.dialect, fetched.url);
        let content =
            NormalizedContent::new(request.identifier.as_str(), fetched.text, fetched.origin);
        self.store(&content).await;
        Some(content)
    }

    async fn store(&self, content: &NormalizedContent) {
        if let Err(e) = self.cache.put(&CacheRecord::from_content(content)).await {
            log::warn!("Failed to cache content for {}: {}", content.identifier, e);
        }
    }
}
