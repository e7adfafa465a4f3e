use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::RoundService;

/// Shared handler state: the round registry and the config it was built from.
#[derive(Clone)]
pub struct AppState {
    pub rounds: Arc<RoundService>,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            rounds: Arc::new(RoundService::new(config.deal_seed)),
            config,
        }
    }
}
