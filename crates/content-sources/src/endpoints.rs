// FILE: src/endpoints.rs

use athena_network::{RequestOptions, ARCHIVE_USER_AGENT, BROWSER_USER_AGENT};
use std::time::Duration;

/// Upstream base URLs, timeouts and User-Agents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEndpoints {
    /// Plain-text archive serving catalog keys
    pub plain_text_base: String,
    /// Bibliographic metadata API
    pub metadata_base: String,
    /// Scanned/OCR text archive
    pub archive_base: String,
    /// Catalog search API
    pub search_base: String,
    pub api_timeout: Duration,
    pub archive_timeout: Duration,
    pub browser_user_agent: String,
    pub archive_user_agent: String,
}

impl Default for SourceEndpoints {
    fn default() -> Self {
        Self {
            plain_text_base: "https://www.gutenberg.org".to_string(),
            metadata_base: "https://openlibrary.org".to_string(),
            archive_base: "https://archive.org".to_string(),
            search_base: "https://gutendex.com".to_string(),
            api_timeout: Duration::from_secs(30),
            archive_timeout: Duration::from_secs(60),
            browser_user_agent: BROWSER_USER_AGENT.to_string(),
            archive_user_agent: ARCHIVE_USER_AGENT.to_string(),
        }
    }
}

impl SourceEndpoints {
    /// Points every upstream at one base URL (used with local fakes)
    pub fn all_at(base: &str) -> Self {
        let base = base.trim_end_matches('/').to_string();
        Self {
            plain_text_base: base.clone(),
            metadata_base: base.clone(),
            archive_base: base.clone(),
            search_base: base,
            ..Self::default()
        }
    }

    /// Options for the JSON metadata and search APIs
    pub fn api_options(&self) -> RequestOptions {
        RequestOptions::new(self.api_timeout).with_user_agent(&self.browser_user_agent)
    }

    /// Options for the plain-text archive
    pub fn plain_text_options(&self) -> RequestOptions {
        RequestOptions::new(self.archive_timeout).with_user_agent(&self.browser_user_agent)
    }

    /// Options for the scanned text archive
    pub fn archive_options(&self) -> RequestOptions {
        RequestOptions::new(self.archive_timeout).with_user_agent(&self.archive_user_agent)
    }
}
