// FILE: crates/library/src/manager.rs

use crate::auth::{Authenticator, StaticTokenAuthenticator};
use crate::books::BookService;
use crate::cache::{ContentCache, SqliteContentCache};
use crate::catalog::CatalogService;
use crate::reading::ReadingService;
use crate::resolver::{ContentResolver, ResolverOptions};
use athena_config::{Config, SourcesConfig};
use athena_content_sources::{MetadataClient, SourceEndpoints};
use athena_core::CuratedCatalog;
use athena_database::DbPool;
use athena_network::HttpFetch;
use log::info;
use std::sync::Arc;
use std::time::Duration;

/// Upstream endpoints described by the `sources` config section
pub fn endpoints_from_config(config: &SourcesConfig) -> SourceEndpoints {
    SourceEndpoints {
        plain_text_base: config.plain_text_base.trim_end_matches('/').to_string(),
        metadata_base: config.metadata_base.trim_end_matches('/').to_string(),
        archive_base: config.archive_base.trim_end_matches('/').to_string(),
        search_base: config.search_base.trim_end_matches('/').to_string(),
        api_timeout: Duration::from_secs(config.api_timeout_secs),
        archive_timeout: Duration::from_secs(config.archive_timeout_secs),
        browser_user_agent: config.browser_user_agent.clone(),
        archive_user_agent: config.archive_user_agent.clone(),
    }
}

/// Built-in curated catalog plus configured extra entries
pub fn catalog_from_config(config: &SourcesConfig) -> CuratedCatalog {
    CuratedCatalog::builtin().with_entries(
        config
            .extra_catalog
            .iter()
            .map(|(identifier, key)| (identifier.clone(), *key)),
    )
}

/// Every service of the reading backend, wired over one pool and one HTTP client
#[derive(Clone)]
pub struct LibraryManager {
    pool: DbPool,
    resolver: Arc<ContentResolver>,
    catalog: Arc<CatalogService>,
    books: Arc<BookService>,
    reading: ReadingService,
    authenticator: Arc<dyn Authenticator>,
}

impl LibraryManager {
    pub fn new(config: &Config, pool: DbPool, fetcher: Arc<dyn HttpFetch>) -> Self {
        let endpoints = Arc::new(endpoints_from_config(&config.sources));
        let catalog = Arc::new(catalog_from_config(&config.sources));
        let cache: Arc<dyn ContentCache> = Arc::new(
            SqliteContentCache::new(pool.clone())
                .with_max_age_days(config.resolution.cache_max_age_days),
        );
        let authenticator = StaticTokenAuthenticator::from_config(&config.auth);

        info!(
            "Library ready: {} curated identifiers, {} API tokens",
            catalog.len(),
            authenticator.len()
        );

        Self {
            resolver: Arc::new(ContentResolver::new(
                cache.clone(),
                fetcher.clone(),
                endpoints.clone(),
                catalog,
                ResolverOptions::from(&config.resolution),
            )),
            catalog: Arc::new(CatalogService::new(cache, fetcher.clone(), endpoints.clone())),
            books: Arc::new(BookService::new(
                pool.clone(),
                MetadataClient::new(fetcher, endpoints),
            )),
            reading: ReadingService::new(pool.clone()),
            authenticator: Arc::new(authenticator),
            pool,
        }
    }

    /// Replaces the authenticator
    pub fn with_authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = authenticator;
        self
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn resolver(&self) -> &Arc<ContentResolver> {
        &self.resolver
    }

    pub fn catalog(&self) -> &CatalogService {
        &self.catalog
    }

    pub fn books(&self) -> &BookService {
        &self.books
    }

    pub fn reading(&self) -> &ReadingService {
        &self.reading
    }

    pub fn authenticator(&self) -> &dyn Authenticator {
        self.authenticator.as_ref()
    }
}
