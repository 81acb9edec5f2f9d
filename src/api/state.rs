//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::assistant::{ChatService, CodeExplainer};
use crate::config::{Config, ServerConfig};
use crate::nexra::CompletionBackend;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Chat message pipeline
    pub chat: Arc<ChatService>,
    /// Code explanation pipeline
    pub explainer: Arc<CodeExplainer>,
    /// Server configuration
    pub server: Arc<ServerConfig>,
    /// Completion API base URL, reported by the health endpoint
    pub nexra_base: String,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Wire both pipelines to the same completion backend
    pub fn new(backend: Arc<dyn CompletionBackend>, config: &Config) -> Self {
        Self {
            chat: Arc::new(ChatService::new(backend.clone(), config.chat_options())),
            explainer: Arc::new(CodeExplainer::new(backend, config.explainer_policy())),
            server: Arc::new(config.server.clone()),
            nexra_base: config.nexra.url.clone(),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
