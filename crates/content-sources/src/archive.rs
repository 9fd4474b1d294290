// FILE: src/archive.rs

use crate::candidate::accept;
use crate::{ContentSource, SourceEndpoints, SourceError, SourceMetadata, SourceRequest, SourceResult};
use athena_core::{Dialect, FetchedText, Provenance};
use athena_network::HttpFetch;
use async_trait::async_trait;
use std::sync::Arc;

/// Scanned/OCR text archive, reached through the edition's content key
///
/// Reads the content key from the request's edition details.
pub struct MetadataArchiveSource {
    fetcher: Arc<dyn HttpFetch>,
    endpoints: Arc<SourceEndpoints>,
}

impl MetadataArchiveSource {
    pub fn new(fetcher: Arc<dyn HttpFetch>, endpoints: Arc<SourceEndpoints>) -> Self {
        Self { fetcher, endpoints }
    }

    /// Candidate text URLs for a content key, in the order they are tried
    pub fn candidate_urls(&self, key: &str) -> Vec<String> {
        let base = &self.endpoints.archive_base;
        vec![
            format!("{}/download/{}/{}_djvu.txt", base, key, key),
            format!("{}/download/{}/{}_text.txt", base, key, key),
            format!("{}/download/{}/{}.txt", base, key, key),
            format!("{}/stream/{}/{}_djvu.txt", base, key, key),
        ]
    }
}

#[async_trait]
impl ContentSource for MetadataArchiveSource {
    async fn fetch(&self, request: &SourceRequest) -> SourceResult<Option<FetchedText>> {
        let Some(key) = request.details.as_ref().and_then(|d| d.ocaid.as_deref()) else {
            log::debug!("No archive content key for {}", request.identifier);
            return Ok(None);
        };

        let options = self.endpoints.archive_options();
        let mut last_failure = None;

        for url in self.candidate_urls(key) {
            match self.fetcher.get_text(&url, &options).await {
                Ok(body) => {
                    let dialect = Dialect::detect_archive(&body);
                    if let Some(fetched) = accept(body, Provenance::MetadataArchive, dialect, &url) {
                        log::info!("Fetched {} as {} from {}", request.identifier, dialect, url);
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

    fn provenance(&self) -> Provenance {
        Provenance::MetadataArchive
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "Scanned text archive".to_string(),
            description: "OCR and HTML text of scanned editions".to_string(),
            base_url: self.endpoints.archive_base.clone(),
        }
    }
}
