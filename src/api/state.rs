//! Shared application state

use std::sync::Arc;

use crate::store::DocumentStore;

/// State shared by every request handler
pub struct AppState {
    /// The document store
    pub store: Arc<DocumentStore>,
}

impl AppState {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }
}
