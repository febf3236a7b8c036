//! # Application State
//!
//! The shared application state (`AppState`) and the logic for building it
//! at startup. The state holds the resolved configuration and the
//! instantiated vision provider client, making them accessible to all
//! request handlers. Nothing in it is mutable after startup.

use crate::config::AppConfig;
use mediatag::providers::ai::{ollama::OllamaProvider, VisionProvider};
use std::{sync::Arc, time::Duration};

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration, loaded from the environment.
    pub config: Arc<AppConfig>,
    /// The instantiated vision model client.
    pub provider: Arc<dyn VisionProvider>,
}

/// Builds the shared application state from the configuration.
pub fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let provider = OllamaProvider::new(
        config.ollama_url.clone(),
        config.model_name.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )?;

    Ok(AppState {
        config: Arc::new(config),
        provider: Arc::new(provider),
    })
}
