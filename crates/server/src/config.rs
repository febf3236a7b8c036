//! # Application Configuration
//!
//! Defines the server configuration and the logic for loading it from
//! environment variables. The configuration is resolved once at startup and
//! is read-only for the lifetime of the process.

use config::{Config as ConfigBuilder, Environment};
use serde::Deserialize;

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    General(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT`.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Base URL of the Ollama endpoint. Loaded from `OLLAMA_URL`.
    #[serde(default = "default_ollama_url")]
    pub ollama_url: String,
    /// The vision-capable model to prompt. Loaded from `MODEL_NAME`.
    #[serde(default = "default_model_name")]
    pub model_name: String,
    /// Maximum number of video frames forwarded per request. Loaded from
    /// `MAX_FRAMES`.
    #[serde(default = "default_max_frames")]
    pub max_frames: usize,
    /// Outbound request timeout in seconds. Loaded from `REQ_TIMEOUTS`.
    #[serde(default = "default_request_timeout", alias = "req_timeouts")]
    pub request_timeout_secs: u64,
}

fn default_port() -> u16 {
    8000
}
fn default_ollama_url() -> String {
    "http://localhost:11434".to_string()
}
fn default_model_name() -> String {
    "llava:13b".to_string()
}
fn default_max_frames() -> usize {
    8
}
fn default_request_timeout() -> u64 {
    600
}

/// Loads the application configuration from environment variables, falling
/// back to the defaults above for anything unset.
pub fn get_config() -> Result<AppConfig, ConfigError> {
    let settings = ConfigBuilder::builder()
        .add_source(Environment::default().try_parsing(true))
        .build()?;

    let mut config: AppConfig = settings.try_deserialize()?;
    config.ollama_url = config.ollama_url.trim_end_matches('/').to_string();
    Ok(config)
}
