//! Application state shared by all handlers.

use formdrop_core::Config;
use formdrop_storage::Storage;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(config: Config, storage: Arc<dyn Storage>) -> Arc<Self> {
        Arc::new(Self { config, storage })
    }
}
