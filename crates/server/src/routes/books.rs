//! Full text, catalog and metadata handlers

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::state::AppState;
use athena_content_sources::CatalogSearchHit;
use athena_core::{BookMetadata, NormalizedContent};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Resolves full text through the source pipeline
pub async fn content(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(identifier): Path<String>,
) -> ApiResult<Json<NormalizedContent>> {
    log::debug!("{} requested full text for {}", user.email, identifier);
    let content = state.library.resolver().resolve_spawned(identifier).await?;
    Ok(Json(content))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    query: String,
}

#[derive(Debug, Serialize)]
pub struct CatalogSearchResponse {
    results: Vec<CatalogSearchHit>,
    count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Keyword search of the public-domain catalog
///
/// Upstream failures are reported in the body with an empty result list.
pub async fn catalog_search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<CatalogSearchResponse>> {
    match state.library.catalog().search(&params.query).await {
        Ok(results) => Ok(Json(CatalogSearchResponse {
            count: results.len(),
            results,
            error: None,
        })),
        Err(e) if e.is_client_error() => Err(e.into()),
        Err(e) => {
            log::warn!("Catalog search for '{}' failed: {}", params.query, e);
            Ok(Json(CatalogSearchResponse {
                results: Vec::new(),
                count: 0,
                error: Some(e.to_string()),
            }))
        }
    }
}

pub async fn catalog_text(
    State(state): State<Arc<AppState>>,
    AuthUser(_user): AuthUser,
    Path(catalog_id): Path<u32>,
) -> ApiResult<Json<NormalizedContent>> {
    Ok(Json(state.library.catalog().fetch_text(catalog_id).await?))
}

/// Validating metadata lookup
pub async fn lookup(
    State(state): State<Arc<AppState>>,
    Path(identifier): Path<String>,
) -> ApiResult<Json<BookMetadata>> {
    Ok(Json(state.library.books().lookup(&identifier).await?))
}
