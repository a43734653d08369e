//! Application state for the payroll tool API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::tools::ToolRegistry;

/// Shared application state.
///
/// Holds the tool registry, which in turn owns the engine client.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<ToolRegistry>,
}

impl AppState {
    /// Creates a new application state around the given registry.
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Returns a reference to the tool registry.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }
}
