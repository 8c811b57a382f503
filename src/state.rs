//! Shared application state for all routes.

use std::sync::Arc;

use crate::storage::ObjectStore;

/// Storage is injected here so tests can run against an isolated in-memory
/// backend.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ObjectStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }
}
