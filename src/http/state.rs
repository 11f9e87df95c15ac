//! Application state for the HTTP server.

use std::sync::Arc;

use crate::services::ScheduleEngine;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Engine instance serving all requests
    pub engine: Arc<ScheduleEngine>,
}

impl AppState {
    /// Create a new application state with the given engine.
    pub fn new(engine: Arc<ScheduleEngine>) -> Self {
        Self { engine }
    }
}
