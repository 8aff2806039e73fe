//! Application state management

use mongodb::{Client, Database};

use crate::config::{Config, DEFAULT_DATABASE};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub mongo_client: Client,
    pub db: Database,
}

impl AppState {
    pub fn new(config: Config, mongo_client: Client) -> Self {
        let db = config.mongodb.database_or(&mongo_client, DEFAULT_DATABASE);
        Self {
            config,
            mongo_client,
            db,
        }
    }
}
