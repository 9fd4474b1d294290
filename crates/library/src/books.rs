//! Validated bibliographic metadata lookup, cached in the `books` table

use crate::error::{LibraryError, LibraryResult};
use athena_content_sources::MetadataClient;
use athena_core::{BookIdentifier, BookMetadata};
use athena_database::{queries, DbPool};

pub struct BookService {
    pool: DbPool,
    metadata: MetadataClient,
}

impl BookService {
    pub fn new(pool: DbPool, metadata: MetadataClient) -> Self {
        Self { pool, metadata }
    }

    /// Metadata for a raw identifier
    ///
    /// Rejects identifiers that fail check-digit validation. Serves the
    /// stored copy when there is one, otherwise asks the metadata API and
    /// stores the answer.
    pub async fn lookup(&self, raw: &str) -> LibraryResult<BookMetadata> {
        let identifier = BookIdentifier::parse(raw)?;

        if let Some(book) = queries::get_book(&self.pool, identifier.as_str()).await? {
            return Ok(book);
        }

        let book = match self.metadata.lookup_metadata(identifier.as_str()).await {
            Ok(Some(book)) => book,
            Ok(None) => return Err(LibraryError::NotFound(identifier.to_string())),
            Err(e) => {
                log::warn!("Metadata lookup failed for {}: {}", identifier, e);
                return Err(LibraryError::NotFound(identifier.to_string()));
            }
        };

        if let Err(e) = queries::upsert_book(&self.pool, &book).await {
            log::warn!("Failed to store metadata for {}: {}", identifier, e);
        }
        Ok(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use athena_content_sources::SourceEndpoints;
    use athena_database::{connect_in_memory, run_migrations};
    use athena_network::MockFetcher;
    use std::sync::Arc;

    const DATA: &str = r#"{"ISBN:9780141439518": {
        "title": "Pride and Prejudice",
        "authors": [{"name": "Jane Austen"}],
        "cover": {"small": "s.jpg", "medium": "m.jpg"},
        "publishers": [{"name": "Penguin"}],
        "number_of_pages": 480,
        "subjects": [{"name": "a"}, {"name": "b"}, {"name": "c"}, {"name": "d"}, {"name": "e"}, {"name": "f"}]
    }}"#;

    async fn service(mock: MockFetcher) -> (BookService, Arc<MockFetcher>, MetadataClient) {
        let pool = connect_in_memory().await.unwrap();
        run_migrations(&pool).await.unwrap();
        let mock = Arc::new(mock);
        let client = MetadataClient::new(
            mock.clone(),
            Arc::new(SourceEndpoints::all_at("http://meta.test")),
        );
        (BookService::new(pool, client.clone()), mock, client)
    }

    fn data_url() -> String {
        MetadataClient::new(
            Arc::new(MockFetcher::new()),
            Arc::new(SourceEndpoints::all_at("http://meta.test")),
        )
        .data_url("9780141439518")
        .unwrap()
    }

    #[tokio::test]
    async fn test_lookup_maps_and_caches() {
        let (service, mock, _) = service(MockFetcher::new().with_body(data_url(), DATA)).await;

        let book = service.lookup("978-0-14-143951-8").await.unwrap();
        assert_eq!(book.identifier, "9780141439518");
        assert_eq!(book.cover_url.as_deref(), Some("m.jpg"));
        assert_eq!(book.publisher.as_deref(), Some("Penguin"));
        assert_eq!(book.subjects.len(), 5);

        let again = service.lookup("9780141439518").await.unwrap();
        assert_eq!(again.title, "Pride and Prejudice");
        assert_eq!(mock.requested_urls().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_identifier_rejected_without_requests() {
        let (service, mock, _) = service(MockFetcher::new()).await;
        let err = service.lookup("1234567890").await.unwrap_err();
        assert!(err.is_client_error());
        assert!(mock.requested_urls().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_book_is_not_found() {
        let (service, _, _) = service(MockFetcher::new().with_body(data_url(), "{}")).await;
        assert!(service.lookup("9780141439518").await.unwrap_err().is_not_found());
    }
}
