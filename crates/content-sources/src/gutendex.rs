// FILE: src/gutendex.rs

use crate::{
    ContentSource, PlainTextArchive, SourceEndpoints, SourceError, SourceMetadata, SourceRequest,
    SourceResult,
};
use athena_core::{Provenance, FetchedText};
use athena_network::{get_json, HttpFetch};
use async_trait::async_trait;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Maximum hits returned by a catalog search
pub const MAX_CATALOG_RESULTS: usize = 10;

/// Maximum subjects kept per catalog hit
const MAX_HIT_SUBJECTS: usize = 3;

#[derive(Debug, Deserialize)]
struct SearchPage {
    #[serde(default)]
    results: Vec<RawBook>,
}

#[derive(Debug, Deserialize)]
struct RawBook {
    id: u32,
    #[serde(default)]
    title: String,
    #[serde(default)]
    authors: Vec<RawPerson>,
    #[serde(default)]
    subjects: Vec<String>,
    #[serde(default)]
    bookshelves: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawPerson {
    name: Option<String>,
}

/// One catalog search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSearchHit {
    pub catalog_id: u32,
    pub title: String,
    pub authors: Vec<String>,
    pub subjects: Vec<String>,
    pub shelf: String,
}

impl From<RawBook> for CatalogSearchHit {
    fn from(book: RawBook) -> Self {
        Self {
            catalog_id: book.id,
            title: book.title,
            authors: book.authors.into_iter().filter_map(|a| a.name).collect(),
            subjects: book.subjects.into_iter().take(MAX_HIT_SUBJECTS).collect(),
            shelf: book.bookshelves.into_iter().next().unwrap_or_default(),
        }
    }
}

/// Keyword search against the catalog search API
#[derive(Clone)]
pub struct CatalogSearch {
    fetcher: Arc<dyn HttpFetch>,
    endpoints: Arc<SourceEndpoints>,
}

impl CatalogSearch {
    pub fn new(fetcher: Arc<dyn HttpFetch>, endpoints: Arc<SourceEndpoints>) -> Self {
        Self { fetcher, endpoints }
    }

    /// Search URL for a free-text query; spaces are sent as `+`
    pub fn search_url(&self, query: &str) -> SourceResult<String> {
        let base = format!("{}/books/", self.endpoints.search_base);
        Url::parse_with_params(&base, &[("search", query)])
            .map(String::from)
            .map_err(|e| SourceError::InvalidQuery(format!("{}: {}", base, e)))
    }

    async fn page(&self, query: &str) -> SourceResult<SearchPage> {
        let url = self.search_url(query)?;
        Ok(get_json(self.fetcher.as_ref(), &url, &self.endpoints.api_options()).await?)
    }

    /// Returns up to [`MAX_CATALOG_RESULTS`] hits for a query
    pub async fn search(&self, query: &str) -> SourceResult<Vec<CatalogSearchHit>> {
        if query.trim().is_empty() {
            return Err(SourceError::InvalidQuery("Empty query".to_string()));
        }

        let page = self.page(query.trim()).await?;
        Ok(page
            .results
            .into_iter()
            .take(MAX_CATALOG_RESULTS)
            .map(CatalogSearchHit::from)
            .collect())
    }

    /// Catalog key of the first hit for a query
    pub async fn first_key(&self, query: &str) -> SourceResult<Option<u32>> {
        let page = self.page(query).await?;
        Ok(page.results.first().map(|book| book.id))
    }
}

/// Finds a title in the catalog by keyword search and fetches its text
pub struct SearchFallbackSource {
    search: CatalogSearch,
    archive: PlainTextArchive,
}

impl SearchFallbackSource {
    pub fn new(search: CatalogSearch, archive: PlainTextArchive) -> Self {
        Self { search, archive }
    }

    /// Searches title plus author, then title alone if that finds nothing
    async fn resolve_key(&self, title: &str, author: Option<&str>) -> SourceResult<Option<u32>> {
        if let Some(author) = author.filter(|a| !a.trim().is_empty()) {
            let query = format!("{} {}", title, author);
            log::debug!("Searching catalog for '{}'", query);
            if let Some(key) = self.search.first_key(&query).await? {
                return Ok(Some(key));
            }
        }

        log::debug!("Searching catalog for title '{}'", title);
        self.search.first_key(title).await
    }
}

#[async_trait]
impl ContentSource for SearchFallbackSource {
    async fn fetch(&self, request: &SourceRequest) -> SourceResult<Option<FetchedText>> {
        let Some(details) = &request.details else {
            log::debug!("No edition details for {}, skipping search", request.identifier);
            return Ok(None);
        };
        let Some(title) = details.title.as_deref() else {
            return Ok(None);
        };

        let Some(key) = self.resolve_key(title, details.primary_author()).await? else {
            log::debug!("Catalog search found nothing for '{}'", title);
            return Ok(None);
        };

        log::info!(
            "Catalog search matched {} to catalog key {}",
            request.identifier,
            key
        );
        self.archive.fetch_book(key, Provenance::SearchFallback).await
    }

    fn provenance(&self) -> Provenance {
        Provenance::SearchFallback
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "Catalog search".to_string(),
            description: "Keyword search by title and author in the public-domain catalog"
                .to_string(),
            base_url: self.search.endpoints.search_base.clone(),
        }
    }
}

#[cfg(test)]
mod gutendex_tests {
    use super::*;
    use crate::EditionDetails;
    use athena_core::MIN_RAW_TEXT_LEN;
    use athena_network::MockFetcher;

    fn endpoints() -> Arc<SourceEndpoints> {
        Arc::new(SourceEndpoints::all_at("http://search.test"))
    }

    fn build(mock: MockFetcher) -> (SearchFallbackSource, CatalogSearch, Arc<MockFetcher>) {
        let mock = Arc::new(mock);
        let search = CatalogSearch::new(mock.clone(), endpoints());
        let archive = PlainTextArchive::new(mock.clone(), endpoints());
        (SearchFallbackSource::new(search.clone(), archive), search, mock)
    }

    fn url(query: &str) -> String {
        build(MockFetcher::new()).1.search_url(query).unwrap()
    }

    fn request(title: Option<&str>, author: Option<&str>) -> SourceRequest {
        SourceRequest::new("9780141439587").with_details(Some(EditionDetails {
            ocaid: None,
            title: title.map(String::from),
            authors: author.map(String::from).into_iter().collect(),
        }))
    }

    #[test]
    fn test_search_url_uses_plus_for_spaces() {
        assert_eq!(
            url("Emma Jane Austen"),
            "http://search.test/books/?search=Emma+Jane+Austen"
        );
    }

    #[tokio::test]
    async fn test_catalog_search_maps_and_caps() {
        let books: Vec<String> = (1..=12)
            .map(|i| {
                format!(
                    r#"{{"id": {}, "title": "Book {}", "authors": [{{"name": "Author {}"}}],
                        "subjects": ["a", "b", "c", "d"], "bookshelves": ["Shelf"]}}"#,
                    i, i, i
                )
            })
            .collect();
        let body = format!(r#"{{"count": 12, "results": [{}]}}"#, books.join(","));
        let (_, search, _) = build(MockFetcher::new().with_body(url("book"), body));

        let hits = search.search("book").await.unwrap();
        assert_eq!(hits.len(), MAX_CATALOG_RESULTS);
        assert_eq!(hits[0].catalog_id, 1);
        assert_eq!(hits[0].authors, vec!["Author 1"]);
        assert_eq!(hits[0].subjects.len(), 3);
        assert_eq!(hits[0].shelf, "Shelf");
    }

    #[tokio::test]
    async fn test_catalog_search_rejects_empty_query() {
        let (_, search, _) = build(MockFetcher::new());
        assert!(matches!(
            search.search("   ").await,
            Err(SourceError::InvalidQuery(_))
        ));
    }

    #[tokio::test]
    async fn test_fallback_retries_with_title_only() {
        let text = "t".repeat(MIN_RAW_TEXT_LEN);
        let (source, _, mock) = build(
            MockFetcher::new()
                .with_body(url("Emma Jane Austen"), r#"{"results": []}"#)
                .with_body(url("Emma"), r#"{"results": [{"id": 158}]}"#)
                .with_body("http://search.test/cache/epub/158/pg158.txt", text.clone()),
        );

        let result = source
            .fetch(&request(Some("Emma"), Some("Jane Austen")))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(result.origin, Provenance::SearchFallback);
        assert_eq!(result.text, text);
        assert!(mock.was_requested(&url("Emma")));
    }

    #[tokio::test]
    async fn test_fallback_without_author_searches_title() {
        let (source, _, mock) = build(
            MockFetcher::new()
                .with_body(url("Emma"), r#"{"results": [{"id": 158}]}"#)
                .with_body("http://search.test/cache/epub/158/pg158.txt", "e".repeat(MIN_RAW_TEXT_LEN)),
        );

        let result = source.fetch(&request(Some("Emma"), None)).await.unwrap().unwrap();
        assert_eq!(result.origin, Provenance::SearchFallback);
        assert_eq!(mock.requested_urls()[0], url("Emma"));
    }

    #[tokio::test]
    async fn test_fallback_without_details_is_miss() {
        let (source, _, mock) = build(MockFetcher::new());
        let result = source.fetch(&SourceRequest::new("9780141439587")).await.unwrap();
        assert!(result.is_none());
        assert!(mock.requested_urls().is_empty());

        let result = source.fetch(&request(None, Some("Someone"))).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_fallback_search_failure_is_error() {
        let (source, _, _) = build(MockFetcher::new().with_status(url("Emma Jane Austen"), 503));
        let result = source.fetch(&request(Some("Emma"), Some("Jane Austen"))).await;
        assert!(matches!(result, Err(SourceError::NetworkError(_))));
    }
}
