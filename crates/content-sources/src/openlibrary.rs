// FILE: src/openlibrary.rs

use crate::{SourceEndpoints, SourceError, SourceResult};
use athena_core::BookMetadata;
use athena_network::{get_json, HttpFetch};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Edition details relevant to text acquisition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditionDetails {
    /// Archive content key of the scanned edition
    pub ocaid: Option<String>,
    pub title: Option<String>,
    pub authors: Vec<String>,
}

impl EditionDetails {
    pub fn primary_author(&self) -> Option<&str> {
        self.authors.first().map(String::as_str)
    }
}

#[derive(Debug, Deserialize)]
struct NamedRef {
    name: Option<String>,
}

fn names(refs: Vec<NamedRef>) -> Vec<String> {
    refs.into_iter().filter_map(|r| r.name).collect()
}

#[derive(Debug, Deserialize)]
struct DetailsEnvelope {
    details: Option<RawDetails>,
}

#[derive(Debug, Deserialize)]
struct RawDetails {
    ocaid: Option<String>,
    title: Option<String>,
    #[serde(default)]
    authors: Vec<NamedRef>,
}

#[derive(Debug, Deserialize)]
struct RawEdition {
    title: Option<String>,
    #[serde(default)]
    authors: Vec<NamedRef>,
    cover: Option<RawCover>,
    #[serde(default)]
    publishers: Vec<NamedRef>,
    publish_date: Option<String>,
    number_of_pages: Option<u32>,
    #[serde(default)]
    subjects: Vec<NamedRef>,
}

#[derive(Debug, Deserialize)]
struct RawCover {
    small: Option<String>,
    medium: Option<String>,
    large: Option<String>,
}

/// Client for the bibliographic metadata API
#[derive(Clone)]
pub struct MetadataClient {
    fetcher: Arc<dyn HttpFetch>,
    endpoints: Arc<SourceEndpoints>,
}

impl MetadataClient {
    pub fn new(fetcher: Arc<dyn HttpFetch>, endpoints: Arc<SourceEndpoints>) -> Self {
        Self { fetcher, endpoints }
    }

    fn books_url(&self, identifier: &str, jscmd: &str) -> SourceResult<String> {
        let base = format!("{}/api/books", self.endpoints.metadata_base);
        let bibkey = format!("ISBN:{}", identifier);
        Url::parse_with_params(
            &base,
            &[("bibkeys", bibkey.as_str()), ("format", "json"), ("jscmd", jscmd)],
        )
        .map(String::from)
        .map_err(|e| SourceError::InvalidQuery(format!("{}: {}", base, e)))
    }

    /// URL of the `details` lookup for an identifier
    pub fn details_url(&self, identifier: &str) -> SourceResult<String> {
        self.books_url(identifier, "details")
    }

    /// URL of the `data` lookup for an identifier
    pub fn data_url(&self, identifier: &str) -> SourceResult<String> {
        self.books_url(identifier, "data")
    }

    /// Looks up edition details; `Ok(None)` when the API has no record
    pub async fn lookup_details(&self, identifier: &str) -> SourceResult<Option<EditionDetails>> {
        let url = self.details_url(identifier)?;
        let mut response: HashMap<String, DetailsEnvelope> =
            get_json(self.fetcher.as_ref(), &url, &self.endpoints.api_options()).await?;

        let details = response
            .remove(&format!("ISBN:{}", identifier))
            .and_then(|envelope| envelope.details)
            .map(|raw| EditionDetails {
                ocaid: raw.ocaid.filter(|k| !k.trim().is_empty()),
                title: raw.title.filter(|t| !t.trim().is_empty()),
                authors: names(raw.authors),
            });

        if details.is_none() {
            log::debug!("No edition details for {}", identifier);
        }
        Ok(details)
    }

    /// Looks up bibliographic metadata; `Ok(None)` when the API has no record
    pub async fn lookup_metadata(&self, identifier: &str) -> SourceResult<Option<BookMetadata>> {
        let url = self.data_url(identifier)?;
        let mut response: HashMap<String, RawEdition> =
            get_json(self.fetcher.as_ref(), &url, &self.endpoints.api_options()).await?;

        let Some(edition) = response.remove(&format!("ISBN:{}", identifier)) else {
            return Ok(None);
        };

        let mut metadata = BookMetadata::new(
            identifier,
            edition.title.unwrap_or_else(|| "Unknown".to_string()),
        )
        .with_subjects(names(edition.subjects));
        metadata.authors = names(edition.authors);
        metadata.cover_url = edition
            .cover
            .and_then(|c| c.large.or(c.medium).or(c.small));
        metadata.publisher = names(edition.publishers).into_iter().next();
        metadata.publish_date = edition.publish_date;
        metadata.page_count = edition.number_of_pages;

        Ok(Some(metadata))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use athena_network::MockFetcher;

    const ID: &str = "9780141439518";

    fn client(mock: MockFetcher) -> MetadataClient {
        MetadataClient::new(
            Arc::new(mock),
            Arc::new(SourceEndpoints::all_at("http://meta.test")),
        )
    }

    fn url_for(jscmd: &str) -> String {
        let c = client(MockFetcher::new());
        if jscmd == "details" {
            c.details_url(ID).unwrap()
        } else {
            c.data_url(ID).unwrap()
        }
    }

    #[test]
    fn test_details_url() {
        assert_eq!(
            url_for("details"),
            "http://meta.test/api/books?bibkeys=ISBN%3A9780141439518&format=json&jscmd=details"
        );
    }

    #[tokio::test]
    async fn test_lookup_details() {
        let body = r#"{"ISBN:9780141439518": {"details": {
            "ocaid": "prideprejudice00aust",
            "title": "Pride and Prejudice",
            "authors": [{"name": "Jane Austen", "key": "/authors/OL21594A"}]
        }}}"#;
        let details = client(MockFetcher::new().with_body(url_for("details"), body))
            .lookup_details(ID)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(details.ocaid.as_deref(), Some("prideprejudice00aust"));
        assert_eq!(details.primary_author(), Some("Jane Austen"));
    }

    #[tokio::test]
    async fn test_lookup_details_empty_response() {
        let details = client(MockFetcher::new().with_body(url_for("details"), "{}"))
            .lookup_details(ID)
            .await
            .unwrap();
        assert!(details.is_none());
    }

    #[tokio::test]
    async fn test_lookup_details_malformed_json() {
        let result = client(MockFetcher::new().with_body(url_for("details"), "<html>"))
            .lookup_details(ID)
            .await;
        assert!(matches!(result, Err(SourceError::ParseError(_))));
    }

    #[tokio::test]
    async fn test_lookup_metadata_maps_fields() {
        let body = r#"{"ISBN:9780141439518": {
            "title": "Pride and Prejudice",
            "authors": [{"name": "Jane Austen"}],
            "cover": {"small": "s.jpg", "medium": "m.jpg"},
            "publishers": [{"name": "Penguin"}, {"name": "Other"}],
            "publish_date": "2003",
            "number_of_pages": 480,
            "subjects": [{"name": "a"}, {"name": "b"}, {"name": "c"}, {"name": "d"}, {"name": "e"}, {"name": "f"}]
        }}"#;
        let metadata = client(MockFetcher::new().with_body(url_for("data"), body))
            .lookup_metadata(ID)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(metadata.identifier, ID);
        assert_eq!(metadata.title, "Pride and Prejudice");
        assert_eq!(metadata.authors, vec!["Jane Austen"]);
        assert_eq!(metadata.cover_url.as_deref(), Some("m.jpg"));
        assert_eq!(metadata.publisher.as_deref(), Some("Penguin"));
        assert_eq!(metadata.page_count, Some(480));
        assert_eq!(metadata.subjects, vec!["a", "b", "c", "d", "e"]);
    }

    #[tokio::test]
    async fn test_lookup_metadata_defaults_title() {
        let body = r#"{"ISBN:9780141439518": {}}"#;
        let metadata = client(MockFetcher::new().with_body(url_for("data"), body))
            .lookup_metadata(ID)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(metadata.title, "Unknown");
        assert!(metadata.cover_url.is_none());
    }

    #[tokio::test]
    async fn test_lookup_metadata_absent() {
        let result = client(MockFetcher::new().with_body(url_for("data"), "{}"))
            .lookup_metadata(ID)
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
