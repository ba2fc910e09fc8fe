//! Test server lifecycle management
//!
//! This module manages spawning and shutting down test HTTP servers.
//! Each test gets an isolated server with its own scripted generation
//! backend, bound to a random port.

use std::sync::Arc;
use std::time::Duration;

use nagma_server::server::{make_app, RequestsLoggingLevel, ServerConfig};
use tokio::net::TcpListener;

use super::generation::ScriptedGenerationClient;

const SERVER_READY_TIMEOUT_MS: u64 = 5_000;

/// Test server instance backed by a scripted generation client.
///
/// When dropped, the server gracefully shuts down.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    /// The scripted backend, for queueing responses and asserting prompts
    pub generation: ScriptedGenerationClient,

    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a new test server on a random port
    ///
    /// # Panics
    ///
    /// Panics if port binding fails or the server does not become ready
    /// within the timeout.
    pub async fn spawn(generation: ScriptedGenerationClient) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            port,
            requests_logging_level: RequestsLoggingLevel::None,
            frontend_dir_path: None,
        };

        let app = make_app(config, Arc::new(generation.clone())).expect("Failed to build app");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            port,
            generation,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Waits for the server to become ready by polling the home endpoint
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            if let Ok(response) = client.get(format!("{}/", self.base_url)).send().await {
                if response.status().is_success() {
                    return;
                }
            }

            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    /// WebSocket URL for the voice endpoint.
    pub fn voice_url(&self, language: &str) -> String {
        format!("ws://127.0.0.1:{}/voice?language={}", self.port, language)
    }
}
