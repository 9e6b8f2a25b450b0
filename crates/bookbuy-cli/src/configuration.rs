use std::path::Path;

use bookbuy::providers::configs::{AgentApiConfig, DEFAULT_API_BASE_URL};
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::ConfigError;

pub const CONFIG_FILE: &str = "bookbuy.toml";

/// Where the agent server lives.
///
/// Sources, lowest precedence first: built-in default, `bookbuy.toml` in the
/// working directory, the `API_BASE_URL` environment variable, then the
/// `--api-url` flag.
#[derive(Debug, Deserialize)]
pub struct Settings {
    pub base_url: String,
}

impl Settings {
    pub fn new(api_url: Option<String>) -> Result<Self, ConfigError> {
        Self::load_and_validate(Path::new(CONFIG_FILE), api_url)
    }

    pub fn into_api_config(self) -> AgentApiConfig {
        AgentApiConfig::new(self.base_url)
    }

    fn load_and_validate(file: &Path, api_url: Option<String>) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("base_url", DEFAULT_API_BASE_URL)?
            .add_source(File::from(file).required(false))
            // API_BASE_URL -> base_url
            .add_source(Environment::with_prefix("API").prefix_separator("_"))
            .set_override_option("base_url", api_url)?
            .build()?;

        let settings: Self = config.try_deserialize()?;
        tracing::debug!(base_url = %settings.base_url, "loaded configuration");

        if settings.base_url.starts_with("http://") || settings.base_url.starts_with("https://") {
            Ok(settings)
        } else {
            Err(ConfigError::InvalidBaseUrl(settings.base_url))
        }
    }
}
