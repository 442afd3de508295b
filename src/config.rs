// article-generation-service/src/config.rs

use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    pub sites: SitesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub log_level: String,
    pub host: String,
    pub port: u16,
}

/// Object-storage settings. Leaving `bucket` unset disables publishing;
/// the pipeline then falls back to the placeholder image URL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    pub bucket: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SitesConfig {
    pub path: String,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let config = ConfigLoader::builder()
            // Start with default values
            .set_default("service.name", "article-generation-service")?
            .set_default("service.log_level", "info")?
            .set_default("service.host", "0.0.0.0")?
            .set_default("service.port", "3000")?
            .set_default("sites.path", "./sites")?
            // Load from config file if it exists
            .add_source(File::with_name("config").required(false))
            // Override with environment variables (e.g., APP__SERVICE__PORT)
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
