//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedOptimizer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Optimizer with plan cache
    pub optimizer: Arc<CachedOptimizer>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(optimizer: CachedOptimizer) -> Self {
        Self {
            optimizer: Arc::new(optimizer),
        }
    }
}
