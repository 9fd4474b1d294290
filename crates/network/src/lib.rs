// crates/network/src/lib.rs
//! HTTP access for the content sources
//!
//! [`Client`] wraps `reqwest` and implements [`HttpFetch`]; sources depend
//! only on the trait so tests can substitute [`MockFetcher`].

mod client;
mod error;
mod fetch;
mod mock;

pub use client::{Client, ClientConfig};
pub use error::{NetworkError, NetworkResult};
pub use fetch::{get_json, HttpFetch, RequestOptions, ARCHIVE_USER_AGENT, BROWSER_USER_AGENT};
pub use mock::MockFetcher;
