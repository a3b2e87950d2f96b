//! Test server lifecycle management
//!
//! Each test gets an isolated server backed by its own fake store and model.

use super::constants::*;
use super::fakes::{FakeLlm, FakeStore};
use lyrics_server::lyrics::{LyricsService, PipelineSettings};
use lyrics_server::server::{make_app, RequestsLoggingLevel, ServerConfig};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// Test server instance
///
/// When dropped, the server gracefully shuts down.
pub struct TestServer {
    /// Base URL of the API, prefix included (e.g., "http://127.0.0.1:12345/api")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    /// Fakes behind the server, for assertions
    pub store: Arc<FakeStore>,
    pub llm: Arc<FakeLlm>,

    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a new test server on a random port
    ///
    /// # Panics
    ///
    /// Panics if the port cannot be bound or the server does not become ready
    /// within the timeout.
    pub async fn spawn(store: FakeStore, llm: FakeLlm) -> Self {
        let store = Arc::new(store);
        let llm = Arc::new(llm);

        let service = LyricsService::new(store.clone(), llm.clone(), PipelineSettings::default());

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}{}", port, API_PREFIX);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            port,
            requests_logging_level: RequestsLoggingLevel::None,
            api_prefix: API_PREFIX.to_string(),
            ..Default::default()
        };
        let app = make_app(config, Arc::new(service));

        // Spawn server in background task with graceful shutdown
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
            store,
            llm,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Waits for the server to become ready by polling the hello endpoint
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

            match client.get(&self.base_url).send().await {
                Ok(response) if response.status().is_success() => return,
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
