// crates/network/tests/network_tests.rs
//! Integration tests for network module

use athena_network::{
    get_json, Client, ClientConfig, HttpFetch, MockFetcher, NetworkError, RequestOptions,
    BROWSER_USER_AGENT,
};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct Page {
    count: u32,
}

#[tokio::test]
async fn test_client_basic_operations() {
    let client = Client::new().expect("Failed to create client");
    let _cloned = client.clone();
}

#[tokio::test]
async fn test_client_with_custom_config() {
    let config = ClientConfig {
        timeout: Duration::from_secs(10),
        user_agent: "TestClient/1.0".to_string(),
        max_redirects: 5,
    };

    let client = Client::with_config(config);
    assert!(client.is_ok());
}

#[tokio::test]
async fn test_get_json_decodes_body() {
    let fetcher = MockFetcher::new().with_body("https://api.test/books", r#"{"count": 3}"#);
    let page: Page = get_json(&fetcher, "https://api.test/books", &RequestOptions::default())
        .await
        .unwrap();
    assert_eq!(page.count, 3);
}

#[tokio::test]
async fn test_get_json_rejects_malformed_body() {
    let fetcher = MockFetcher::new().with_body("https://api.test/books", "<html>oops</html>");
    let result: Result<Page, _> =
        get_json(&fetcher, "https://api.test/books", &RequestOptions::default()).await;
    assert!(matches!(result, Err(NetworkError::InvalidBody { .. })));
}

#[tokio::test]
async fn test_options_are_forwarded() {
    let fetcher: Arc<dyn HttpFetch> = Arc::new(
        MockFetcher::new().with_body("https://archive.test/a.txt", "text"),
    );
    let options = RequestOptions::new(Duration::from_secs(60)).with_user_agent(BROWSER_USER_AGENT);
    fetcher
        .get_text("https://archive.test/a.txt", &options)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_mock_records_options() {
    let fetcher = MockFetcher::new().with_body("https://archive.test/a.txt", "text");
    let options = RequestOptions::new(Duration::from_secs(60)).with_user_agent(BROWSER_USER_AGENT);
    fetcher.get_text("https://archive.test/a.txt", &options).await.unwrap();
    assert_eq!(fetcher.options_for("https://archive.test/a.txt"), Some(options));
}
