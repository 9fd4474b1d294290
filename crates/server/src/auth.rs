//! Bearer authentication extractor

use crate::error::ApiError;
use crate::state::AppState;
use athena_core::User;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use std::sync::Arc;

/// The user behind the request's `Authorization: Bearer` credential
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

/// Extracts the token from an `Authorization` header value
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(bearer_token)
            .ok_or(ApiError::Unauthorized)?;

        match state.library.authenticator().authenticate(token).await {
            Some(user) => Ok(AuthUser(user)),
            None => {
                log::debug!("Rejected unknown bearer token");
                Err(ApiError::Unauthorized)
            }
        }
    }
}
