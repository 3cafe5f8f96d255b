use config::Config;
use sse::StreamRegistry;
use std::sync::Arc;

pub mod config;
pub mod logging;

// Service-level state shared by every request handler
// Needs to implement Clone to be able to be passed into Router as State
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub stream_registry: Arc<StreamRegistry>,
}

impl AppState {
    pub fn new(app_config: Config) -> Self {
        Self {
            config: app_config,
            stream_registry: Arc::new(StreamRegistry::new()),
        }
    }

    /// Number of event streams currently being produced.
    pub fn active_streams(&self) -> usize {
        self.stream_registry.len()
    }
}
