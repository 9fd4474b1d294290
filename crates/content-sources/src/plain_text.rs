// FILE: src/plain_text.rs

use crate::candidate::accept;
use crate::{SourceEndpoints, SourceError, SourceResult};
use athena_core::{Dialect, FetchedText, Provenance};
use athena_network::HttpFetch;
use std::sync::Arc;

/// Plain-text archive addressed by numeric catalog key
///
/// Shared by the curated-catalog and search-fallback sources.
#[derive(Clone)]
pub struct PlainTextArchive {
    fetcher: Arc<dyn HttpFetch>,
    endpoints: Arc<SourceEndpoints>,
}

impl PlainTextArchive {
    pub fn new(fetcher: Arc<dyn HttpFetch>, endpoints: Arc<SourceEndpoints>) -> Self {
        Self { fetcher, endpoints }
    }

    /// Candidate URLs for a catalog key, in the order they are tried
    pub fn candidate_urls(&self, key: u32) -> Vec<String> {
        let base = &self.endpoints.plain_text_base;
        vec![
            format!("{}/cache/epub/{}/pg{}.txt", base, key, key),
            format!("{}/files/{}/{}-0.txt", base, key, key),
            format!("{}/files/{}/{}.txt", base, key, key),
        ]
    }

    /// Fetches the first candidate whose body is long enough once normalized
    ///
    /// Returns `Err` only when no candidate succeeded and at least one
    /// failed for a reason other than "not found".
    pub async fn fetch_book(
        &self,
        key: u32,
        origin: Provenance,
    ) -> SourceResult<Option<FetchedText>> {
        let options = self.endpoints.plain_text_options();
        let mut last_failure = None;

        for url in self.candidate_urls(key) {
            match self.fetcher.get_text(&url, &options).await {
                Ok(body) => {
                    if let Some(fetched) = accept(body, origin, Dialect::PlainText, &url) {
                        log::info!("Fetched catalog key {} from {}", key, url);
                        return Ok(Some(fetched));
                    }
                }
                Err(e) if e.is_client_error() => {
                    log::debug!("{} not available: {}", url, e);
                }
                Err(e) => {
                    log::warn!("Error fetching {}: {}", url, e);
                    last_failure = Some(e);
                }
            }
        }

        match last_failure {
            Some(e) => Err(SourceError::Unavailable(e.to_string())),
            None => Ok(None),
        }
    }
}
