//! Configuration for Products API

use core_config::{env_parse, server::ServerConfig, ConfigError, FromEnv};
use database::mongodb::MongoConfig;
use std::time::Duration;

pub use core_config::Environment;

/// Database used when neither `MONGODB_DATABASE` nor the connection string
/// names one
pub const DEFAULT_DATABASE: &str = "products";

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub mongodb: MongoConfig,
    /// Budget for closing connections once the server stopped accepting requests
    pub shutdown_timeout: Duration,
}

impl FromEnv for Config {
    fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let mongodb = MongoConfig::from_env()?;
        let shutdown_timeout_secs = env_parse("SHUTDOWN_TIMEOUT_SECS", 30u64)?;

        Ok(Self {
            environment,
            server,
            mongodb,
            shutdown_timeout: Duration::from_secs(shutdown_timeout_secs),
        })
    }
}
