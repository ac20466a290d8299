use buckethealth::{AppState, BucketInspector, InMemoryStore, create_app};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Test server handle that automatically shuts down on drop
///
/// This starts a real HTTP server on a random port for integration testing.
/// The server uses the actual production code via create_app(). The backing
/// InMemoryStore handle stays available so tests can seed buckets.
pub struct TestServer {
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
    #[allow(dead_code)] // Keep handle alive to prevent task abort
    handle: JoinHandle<()>,
    pub client: reqwest::Client,
    pub base_url: String,
    pub store: InMemoryStore,
}

impl TestServer {
    /// Start a test server backed by the given in-memory store
    pub async fn start(store: InMemoryStore) -> Self {
        let inspector = BucketInspector::new(Arc::new(store.clone()));
        let app_state = AppState::new(Arc::new(inspector));

        // Use the ACTUAL production create_app function
        let app = create_app(app_state);

        // Bind to a random available port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Create shutdown channel
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .unwrap();
        });

        // Give the server a moment to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        TestServer {
            shutdown_tx: Some(shutdown_tx),
            handle,
            client: reqwest::Client::new(),
            base_url: format!("http://{}", addr),
            store,
        }
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        // Signal shutdown (ignore errors if already shut down)
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
