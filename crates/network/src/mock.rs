// crates/network/src/mock.rs
//! In-memory [`HttpFetch`] for tests

use crate::error::{NetworkError, NetworkResult};
use crate::fetch::{HttpFetch, RequestOptions};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone)]
enum Canned {
    Body(String),
    Status(u16),
    Timeout,
}

/// Serves canned responses by exact URL and records every request
///
/// Unknown URLs answer 404.
#[derive(Debug, Default)]
pub struct MockFetcher {
    responses: Mutex<HashMap<String, Canned>>,
    requests: Mutex<Vec<(String, RequestOptions)>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `url` with a 200 and `body`
    pub fn with_body(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.insert(url.into(), Canned::Body(body.into()));
        self
    }

    /// Answers `url` with a non-success status
    pub fn with_status(self, url: impl Into<String>, status: u16) -> Self {
        self.insert(url.into(), Canned::Status(status));
        self
    }

    /// Makes `url` time out
    pub fn with_timeout(self, url: impl Into<String>) -> Self {
        self.insert(url.into(), Canned::Timeout);
        self
    }

    fn insert(&self, url: String, canned: Canned) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.insert(url, canned);
        }
    }

    /// URLs requested so far, in order
    pub fn requested_urls(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|r| r.iter().map(|(url, _)| url.clone()).collect())
            .unwrap_or_default()
    }

    /// Options passed with the request for `url`, if it was requested
    pub fn options_for(&self, url: &str) -> Option<RequestOptions> {
        self.requests
            .lock()
            .ok()?
            .iter()
            .find(|(u, _)| u == url)
            .map(|(_, o)| o.clone())
    }

    /// Returns true if `url` was requested at least once
    pub fn was_requested(&self, url: &str) -> bool {
        self.requested_urls().iter().any(|u| u == url)
    }

    /// Returns true if any requested URL starts with `prefix`
    pub fn was_requested_prefix(&self, prefix: &str) -> bool {
        self.requested_urls().iter().any(|u| u.starts_with(prefix))
    }
}

#[async_trait]
impl HttpFetch for MockFetcher {
    async fn get_text(&self, url: &str, options: &RequestOptions) -> NetworkResult<String> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push((url.to_string(), options.clone()));
        }

        let canned = self
            .responses
            .lock()
            .map_err(|_| NetworkError::Custom("mock poisoned".to_string()))?
            .get(url)
            .cloned();

        match canned {
            Some(Canned::Body(body)) => Ok(body),
            Some(Canned::Status(status)) => Err(NetworkError::Status {
                url: url.to_string(),
                status,
            }),
            Some(Canned::Timeout) => Err(NetworkError::Timeout {
                url: url.to_string(),
                seconds: options.timeout.as_secs(),
            }),
            None => Err(NetworkError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_serves_canned_bodies() {
        let mock = MockFetcher::new()
            .with_body("https://a.test/1", "hello")
            .with_status("https://a.test/2", 500)
            .with_timeout("https://a.test/3");
        let opts = RequestOptions::default();

        assert_eq!(mock.get_text("https://a.test/1", &opts).await.unwrap(), "hello");
        assert!(mock.get_text("https://a.test/2", &opts).await.unwrap_err().is_server_error());
        assert!(mock.get_text("https://a.test/3", &opts).await.unwrap_err().is_timeout());
        assert!(mock.get_text("https://a.test/4", &opts).await.unwrap_err().is_client_error());

        assert_eq!(mock.requested_urls().len(), 4);
        assert!(mock.was_requested("https://a.test/2"));
        assert!(mock.was_requested_prefix("https://a.test/"));
    }
}
