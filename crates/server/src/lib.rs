//! Athena HTTP service
//!
//! Routes live under `/api`, with an unauthenticated `/health`.

pub mod auth;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use routes::router;
pub use state::AppState;
