//! Database query operations organized by entity

pub mod bookmarks;
pub mod books;
pub mod contents;
pub mod highlights;
pub mod progress;
pub mod users;

pub use bookmarks::{create_bookmark, delete_bookmarks_at, list_bookmarks};
pub use books::{get_book, upsert_book};
pub use contents::{count_contents, get_content, upsert_content};
pub use highlights::{create_highlight, list_highlights};
pub use progress::{get_progress, list_library, upsert_progress};
pub use users::{ensure_user, get_user, update_streak};
