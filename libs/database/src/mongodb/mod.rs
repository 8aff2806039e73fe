//! MongoDB connector
//!
//! Connection management, startup retry and liveness checks for MongoDB.

mod config;
mod connector;
mod health;

pub use config::MongoConfig;
pub use connector::{client_options, connect_from_config, connect_from_config_with_retry};
pub use health::{HealthStatus, check_health, ping};

pub use mongodb::{Client, Collection, Database};
