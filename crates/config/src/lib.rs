//! Configuration loading for the support agent
//!
//! Settings come from an optional TOML file plus environment variables
//! with the SUPPORT_AGENT_ prefix (double underscore as the nesting
//! separator, e.g. SUPPORT_AGENT__SERVER__PORT=8080).

pub mod settings;

pub use settings::{load_settings, LlmSettings, ServerConfig, Settings};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
