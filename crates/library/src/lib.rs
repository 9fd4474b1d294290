//! Athena Library Services
//!
//! Orchestration layer over core, database and content sources: full-text
//! resolution, catalog access, metadata lookup, reading state and
//! authentication.

pub mod auth;
pub mod books;
pub mod cache;
pub mod catalog;
pub mod error;
pub mod manager;
pub mod reading;
pub mod resolver;

pub use auth::{Authenticator, StaticTokenAuthenticator};
pub use books::BookService;
pub use cache::{ContentCache, SqliteContentCache};
pub use catalog::{catalog_cache_key, CatalogService};
pub use error::{LibraryError, LibraryResult};
pub use manager::{catalog_from_config, endpoints_from_config, LibraryManager};
pub use reading::{LibraryEntry, ReadingService, LIST_LIMIT};
pub use resolver::{ContentResolver, ResolverOptions, UNAVAILABLE_MESSAGE};
