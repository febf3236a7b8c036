//! # Common Test Utilities
//!
//! Centralizes the harness used across the `mediatag-server` integration
//! tests. `TestApp` spawns the real server on a random port, configured to
//! talk to an `httpmock` stand-in for the Ollama endpoint.

// Allow unused code because this is a test utility module, and not all
// functions are used by every test file that includes it.
#![allow(unused)]

use anyhow::Result;
use httpmock::MockServer;
use mediatag_server::{config::AppConfig, router::create_router, state::build_app_state};
use reqwest::Client;
use std::net::SocketAddr;
use tokio::{net::TcpListener, task::JoinHandle};

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the application server pointed at a fresh mock Ollama
    /// endpoint and returns a `TestApp` instance.
    pub async fn spawn() -> Result<Self> {
        let mock_server = MockServer::start();
        let ollama_url = mock_server.base_url();
        Self::spawn_with_ollama_url(mock_server, &ollama_url).await
    }

    /// Spawns the application server against an arbitrary upstream URL.
    /// Useful for exercising behavior when the model endpoint is down.
    pub async fn spawn_with_ollama_url(mock_server: MockServer, ollama_url: &str) -> Result<Self> {
        // `try_init` is used to prevent panic if the logger is already initialized.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let config = AppConfig {
            port: 0,
            ollama_url: ollama_url.trim_end_matches('/').to_string(),
            model_name: "test-vision-model".to_string(),
            max_frames: 8,
            request_timeout_secs: 5,
        };

        let app_state = build_app_state(config)?;

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = create_router(app_state);
            let server = axum::serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {e}");
            }
        });

        // Give the server a moment to start up.
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            // The receiver might already be gone if the server task panicked,
            // so we ignore the result of send.
            let _ = tx.send(());
        }
    }
}
