//! Authenticated reading-state handlers

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::state::AppState;
use athena_core::{Bookmark, Highlight, Progress, User};
use athena_library::LibraryEntry;
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct ProgressRequest {
    identifier: String,
    position: f64,
}

#[derive(Debug, Deserialize)]
pub struct BookmarkRequest {
    identifier: String,
    position: f64,
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
pub struct HighlightRequest {
    identifier: String,
    text: String,
    color: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    message: &'static str,
}

pub async fn save_progress(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(request): Json<ProgressRequest>,
) -> ApiResult<Json<Progress>> {
    let progress = state
        .library
        .reading()
        .save_progress(&user, &request.identifier, request.position)
        .await?;
    Ok(Json(progress))
}

pub async fn get_progress(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(identifier): Path<String>,
) -> ApiResult<Json<Option<Progress>>> {
    Ok(Json(state.library.reading().get_progress(&user, &identifier).await?))
}

pub async fn add_bookmark(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(request): Json<BookmarkRequest>,
) -> ApiResult<Json<Bookmark>> {
    let bookmark = state
        .library
        .reading()
        .add_bookmark(&user, &request.identifier, request.position, &request.text)
        .await?;
    Ok(Json(bookmark))
}

pub async fn list_bookmarks(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(identifier): Path<String>,
) -> ApiResult<Json<Vec<Bookmark>>> {
    Ok(Json(state.library.reading().list_bookmarks(&user, &identifier).await?))
}

pub async fn delete_bookmark(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path((identifier, position)): Path<(String, f64)>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .library
        .reading()
        .delete_bookmark(&user, &identifier, position)
        .await?;
    Ok(Json(MessageResponse {
        message: "Bookmark deleted",
    }))
}

pub async fn add_highlight(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(request): Json<HighlightRequest>,
) -> ApiResult<Json<Highlight>> {
    let highlight = state
        .library
        .reading()
        .add_highlight(&user, &request.identifier, &request.text, request.color)
        .await?;
    Ok(Json(highlight))
}

pub async fn list_highlights(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(identifier): Path<String>,
) -> ApiResult<Json<Vec<Highlight>>> {
    Ok(Json(state.library.reading().list_highlights(&user, &identifier).await?))
}

pub async fn library(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> ApiResult<Json<Vec<LibraryEntry>>> {
    Ok(Json(state.library.reading().library(&user).await?))
}

pub async fn me(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> ApiResult<Json<User>> {
    Ok(Json(state.library.reading().current_user(&user).await?))
}
