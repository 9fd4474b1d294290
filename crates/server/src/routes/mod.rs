//! Route table

mod books;
mod health;
mod reading;

use crate::state::AppState;
use axum::routing::{delete, get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Builds the application router over shared state
pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/books/content/{identifier}", get(books::content))
        .route("/books/catalog-search", get(books::catalog_search))
        .route("/books/catalog/{catalog_id}", get(books::catalog_text))
        .route("/books/search/{identifier}", get(books::lookup))
        .route("/progress", post(reading::save_progress))
        .route("/progress/{identifier}", get(reading::get_progress))
        .route("/bookmarks", post(reading::add_bookmark))
        .route("/bookmarks/{identifier}", get(reading::list_bookmarks))
        .route(
            "/bookmarks/{identifier}/{position}",
            delete(reading::delete_bookmark),
        )
        .route("/highlights", post(reading::add_highlight))
        .route("/highlights/{identifier}", get(reading::list_highlights))
        .route("/library", get(reading::library))
        .route("/auth/me", get(reading::me));

    Router::new()
        .route("/health", get(health::health))
        .nest("/api", api)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
