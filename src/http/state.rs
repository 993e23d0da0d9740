//! Application state for the HTTP server.

use std::sync::Arc;
use crate::store::BookStore;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Store instance backing the books resource
    pub store: Arc<dyn BookStore>,
}

impl AppState {
    /// Create a new application state with the given store.
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }
}
