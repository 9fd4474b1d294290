// crates/network/src/fetch.rs
//! Text fetching abstraction used by the content sources

use crate::error::NetworkResult;
use async_trait::async_trait;
use std::time::Duration;

/// Browser-like User-Agent for upstreams that reject unidentified clients
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

/// Longer browser User-Agent accepted by the scanned text archive
pub const ARCHIVE_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Per-request options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    pub timeout: Duration,
    /// Overrides the client's default User-Agent
    pub user_agent: Option<String>,
}

impl RequestOptions {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            user_agent: None,
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(Duration::from_secs(30))
    }
}

/// Fetches a URL and returns its body as text
///
/// Non-2xx responses are errors. Implementations never retry.
#[async_trait]
pub trait HttpFetch: Send + Sync {
    async fn get_text(&self, url: &str, options: &RequestOptions) -> NetworkResult<String>;
}

/// Fetches a URL and decodes the body as JSON
pub async fn get_json<T, F>(fetcher: &F, url: &str, options: &RequestOptions) -> NetworkResult<T>
where
    T: serde::de::DeserializeOwned,
    F: HttpFetch + ?Sized,
{
    let body = fetcher.get_text(url, options).await?;
    serde_json::from_str(&body).map_err(|e| crate::NetworkError::InvalidBody {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_options_builder() {
        let options = RequestOptions::new(Duration::from_secs(60)).with_user_agent(BROWSER_USER_AGENT);
        assert_eq!(options.timeout, Duration::from_secs(60));
        assert_eq!(options.user_agent.as_deref(), Some(BROWSER_USER_AGENT));
    }

    #[test]
    fn test_default_options() {
        let options = RequestOptions::default();
        assert_eq!(options.timeout, Duration::from_secs(30));
        assert!(options.user_agent.is_none());
    }
}
