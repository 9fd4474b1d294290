//! Shared handler state

use athena_library::LibraryManager;
use std::sync::Arc;

pub struct AppState {
    pub library: LibraryManager,
}

impl AppState {
    pub fn new(library: LibraryManager) -> Arc<Self> {
        Arc::new(Self { library })
    }
}
