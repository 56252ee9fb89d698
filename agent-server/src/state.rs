//! Shared application state for the agent server.

use std::sync::Arc;

use agent::interpreter::Completions;
use agent::io::paths::PathGuard;

/// Shared state accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Guard restricting every file access to the data root.
    pub guard: PathGuard,
    /// Completion-service backend used to interpret tasks.
    pub completions: Arc<dyn Completions>,
}

impl AppState {
    pub fn new(guard: PathGuard, completions: Arc<dyn Completions>) -> Self {
        Self { guard, completions }
    }
}
