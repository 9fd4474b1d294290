//! Upstream content source configuration section

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SourcesConfig {
    /// Plain-text archive addressed by catalog key
    pub plain_text_base: String,

    /// Bibliographic metadata API
    pub metadata_base: String,

    /// Scanned text archive
    pub archive_base: String,

    /// Catalog search API
    pub search_base: String,

    /// Timeout for the JSON metadata and search APIs
    pub api_timeout_secs: u64,

    /// Timeout for full-text downloads
    pub archive_timeout_secs: u64,

    pub browser_user_agent: String,

    pub archive_user_agent: String,

    /// Additional identifier → catalog key entries, merged over the built-in table
    pub extra_catalog: BTreeMap<String, u32>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            plain_text_base: "https://www.gutenberg.org".to_string(),
            metadata_base: "https://openlibrary.org".to_string(),
            archive_base: "https://archive.org".to_string(),
            search_base: "https://gutendex.com".to_string(),
            api_timeout_secs: 30,
            archive_timeout_secs: 60,
            browser_user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64)".to_string(),
            archive_user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36"
                .to_string(),
            extra_catalog: BTreeMap::new(),
        }
    }
}

impl ConfigSection for SourcesConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut results = vec![
            Validator::http_url(&self.plain_text_base, "sources.plain_text_base"),
            Validator::http_url(&self.metadata_base, "sources.metadata_base"),
            Validator::http_url(&self.archive_base, "sources.archive_base"),
            Validator::http_url(&self.search_base, "sources.search_base"),
            Validator::in_range(self.api_timeout_secs, 1, 600, "sources.api_timeout_secs"),
            Validator::in_range(self.archive_timeout_secs, 1, 600, "sources.archive_timeout_secs"),
            Validator::not_empty(&self.browser_user_agent, "sources.browser_user_agent"),
            Validator::not_empty(&self.archive_user_agent, "sources.archive_user_agent"),
        ];

        for identifier in self.extra_catalog.keys() {
            if identifier.trim().is_empty() || identifier.contains(char::is_whitespace) {
                results.push(Err(ValidationError::with_value(
                    "sources.extra_catalog",
                    "identifiers must be canonical (no whitespace)",
                    identifier,
                )));
            }
        }

        Validator::collect_errors(results)
    }

    fn merge(&mut self, other: Self) {
        self.plain_text_base = other.plain_text_base;
        self.metadata_base = other.metadata_base;
        self.archive_base = other.archive_base;
        self.search_base = other.search_base;
        self.api_timeout_secs = other.api_timeout_secs;
        self.archive_timeout_secs = other.archive_timeout_secs;
        self.browser_user_agent = other.browser_user_agent;
        self.archive_user_agent = other.archive_user_agent;
        self.extra_catalog.extend(other.extra_catalog);
    }

    fn section_name(&self) -> &'static str {
        "sources"
    }
}
