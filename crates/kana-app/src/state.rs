use std::sync::Arc;

use kana_config::Config;
use kana_core::Catalog;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub catalog: Catalog,
}

impl AppState {
    pub fn new(config: Config, catalog: Catalog) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            catalog,
        }
    }
}
