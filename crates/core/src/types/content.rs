//! Fetched and normalized book content

use crate::types::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum raw body length accepted from plain-text and archive sources
pub const MIN_RAW_TEXT_LEN: usize = 1000;

/// Minimum normalized length accepted for HTML- and OCR-derived text
pub const MIN_HTML_TEXT_LEN: usize = 500;

/// Returns true if `text` has at least `floor` characters
///
/// Stops counting at the floor so large documents are not walked in full.
pub fn meets_length_floor(text: &str, floor: usize) -> bool {
    floor == 0 || text.chars().nth(floor - 1).is_some()
}

/// Markup family of a raw fetched document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
    /// Plain text wrapped in a license banner
    PlainText,
    /// An HTML page
    Html,
    /// OCR output with no markup
    OcrDump,
}

impl Dialect {
    /// Classifies an archive payload: HTML if a doctype or `<html` tag
    /// appears in the first 100 characters, OCR dump otherwise
    pub fn detect_archive(body: &str) -> Self {
        let head: String = body.chars().take(100).collect();
        let head = head.to_ascii_lowercase();
        if head.contains("<!doctype") || head.contains("<html") {
            Dialect::Html
        } else {
            Dialect::OcrDump
        }
    }

    /// Minimum normalized length for text of this dialect to count as a hit
    pub fn min_usable_len(&self) -> usize {
        match self {
            Dialect::PlainText => MIN_RAW_TEXT_LEN,
            Dialect::Html | Dialect::OcrDump => MIN_HTML_TEXT_LEN,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::PlainText => write!(f, "plain-text"),
            Dialect::Html => write!(f, "html"),
            Dialect::OcrDump => write!(f, "ocr-dump"),
        }
    }
}

/// Which source (or the cache) produced a piece of content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Provenance {
    Cache,
    CuratedCatalog,
    Fixture,
    MetadataArchive,
    SearchFallback,
    Unavailable,
}

impl Provenance {
    /// Wire tag used in API responses and cache records
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Cache => "cache",
            Provenance::CuratedCatalog => "curated-catalog",
            Provenance::Fixture => "fixture",
            Provenance::MetadataArchive => "metadata-archive",
            Provenance::SearchFallback => "search-fallback",
            Provenance::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provenance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cache" => Ok(Provenance::Cache),
            "curated-catalog" => Ok(Provenance::CuratedCatalog),
            "fixture" => Ok(Provenance::Fixture),
            "metadata-archive" => Ok(Provenance::MetadataArchive),
            "search-fallback" => Ok(Provenance::SearchFallback),
            "unavailable" => Ok(Provenance::Unavailable),
            other => Err(format!("unknown provenance '{}'", other)),
        }
    }
}

/// Raw body returned by a source adapter, consumed by the normalizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFetchResult {
    pub text: String,
    pub origin: Provenance,
    pub dialect: Dialect,
    /// URL the body was fetched from
    pub url: String,
}

impl RawFetchResult {
    pub fn new(
        text: impl Into<String>,
        origin: Provenance,
        dialect: Dialect,
        url: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            origin,
            dialect,
            url: url.into(),
        }
    }
}

/// Normalized body accepted from one candidate URL
///
/// Adapters normalize each candidate before accepting it, so a body that
/// passes the raw floor but cleans up too short moves on to the next URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedText {
    /// Normalized text, already at or above the dialect's floor
    pub text: String,
    pub origin: Provenance,
    pub dialect: Dialect,
    pub url: String,
}

/// Clean text for one identifier, tagged with where it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedContent {
    pub identifier: String,
    pub content: String,
    #[serde(rename = "source")]
    pub provenance: Provenance,
}

impl NormalizedContent {
    pub fn new(identifier: impl Into<String>, content: impl Into<String>, provenance: Provenance) -> Self {
        Self {
            identifier: identifier.into(),
            content: content.into(),
            provenance,
        }
    }

    /// Returns true if this content was produced by a real resolution
    pub fn is_available(&self) -> bool {
        self.provenance != Provenance::Unavailable
    }
}

/// Persisted content cache row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheRecord {
    pub identifier: String,
    pub content: String,
    /// Provenance of the resolution that produced this record
    pub source: Provenance,
    pub cached_at: Timestamp,
}

impl CacheRecord {
    pub fn new(identifier: impl Into<String>, content: impl Into<String>, source: Provenance) -> Self {
        Self {
            identifier: identifier.into(),
            content: content.into(),
            source,
            cached_at: Timestamp::now(),
        }
    }

    /// Builds a cache record from freshly resolved content
    pub fn from_content(content: &NormalizedContent) -> Self {
        Self::new(&content.identifier, &content.content, content.provenance)
    }

    /// Content as served from the cache
    pub fn into_content(self) -> NormalizedContent {
        NormalizedContent::new(self.identifier, self.content, Provenance::Cache)
    }
}
