//! Configuration management

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_FILE_PREFIX, DEFAULT_RESTAURANT_ID,
};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ApiSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub name: String,
}

/// Remote catalog API. Requests are single attempt with no timeout.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub restaurant_id: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub directory: String,
    pub file_prefix: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::with_defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        config.try_deserialize()
    }

    /// Built-in settings only, without files or environment.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::with_defaults()?.build()?.try_deserialize()
    }

    fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.name", "menu-console")?
            .set_default("api.base_url", DEFAULT_API_BASE_URL)?
            .set_default("api.restaurant_id", DEFAULT_RESTAURANT_ID)?
            .set_default("log.directory", DEFAULT_LOG_DIRECTORY)?
            .set_default("log.file_prefix", DEFAULT_LOG_FILE_PREFIX)
    }
}
