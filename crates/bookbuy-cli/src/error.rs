use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API base URL must start with http:// or https:// (got '{0}')")]
    InvalidBaseUrl(String),
    #[error("Configuration error: {0}")]
    Other(#[from] config::ConfigError),
}
