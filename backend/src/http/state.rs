//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::ServiceConfig;

/// Shared application state passed to all handlers.
#[derive(Clone, Default)]
pub struct AppState {
    /// Loaded configuration; read-only after startup
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    /// Create a new application state with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
