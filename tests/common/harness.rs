//! Test server harness.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use factlens::analysis::Analyzer;
use factlens::classifier::SentimentClassifier;
use factlens::engine::DecisionPolicy;
use factlens::gateway::{HandlerState, create_router_with_state};
use factlens::lexicon::Lexicon;
use factlens::metadata::{FetchConfig, HttpFetcher};

#[derive(Debug, Clone)]
pub struct TestServerConfig {
    pub fetch_timeout: Duration,
    pub policy: DecisionPolicy,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(2),
            policy: DecisionPolicy::default(),
        }
    }
}

pub struct TestServer {
    addr: SocketAddr,
    analyzer: Analyzer<SentimentClassifier>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    _server_handle: JoinHandle<()>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn analyzer(&self) -> &Analyzer<SentimentClassifier> {
        &self.analyzer
    }

    pub async fn shutdown(mut self) {
        self.analyzer.teardown();
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Starts the full router on an ephemeral port with the stub classifier and
/// real HTTP fetchers.
pub async fn spawn_test_server(config: TestServerConfig) -> anyhow::Result<TestServer> {
    let classifier = SentimentClassifier::stub()?;
    let analyzer = Analyzer::new(Lexicon::builtin(), classifier, config.policy);

    let metadata_fetcher = HttpFetcher::new(&FetchConfig::metadata(
        config.fetch_timeout,
        "Mozilla/5.0",
    ))?;
    let preview_fetcher = HttpFetcher::new(&FetchConfig::browser(config.fetch_timeout))?;

    let state = HandlerState::new(analyzer.clone(), metadata_fetcher, preview_fetcher);
    let app = create_router_with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .expect("test server failed");
    });

    Ok(TestServer {
        addr,
        analyzer,
        shutdown_tx: Some(shutdown_tx),
        _server_handle: server_handle,
    })
}
