//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the loaded configuration, the unlocked-session set, and the
//! failed-attempt limiter. Everything is in memory.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::attempts::AttemptLimiter;
use crate::services::session::SessionStore;

/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub sessions: SessionStore,
    pub attempts: AttemptLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let attempts = AttemptLimiter::new(config.max_failures, config.failure_window);
        let sessions = SessionStore::new(config.session_ttl);
        Self { config: Arc::new(config), sessions, attempts }
    }
}
