//! Factlens HTTP server entrypoint.

use std::net::SocketAddr;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use factlens::analysis::Analyzer;
use factlens::classifier::SentimentClassifier;
use factlens::config::Config;
use factlens::gateway::{HandlerState, create_router_with_state};
use factlens::lexicon::Lexicon;
use factlens::metadata::{FetchConfig, HttpFetcher};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check());
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        fetch_timeout_secs = config.fetch_timeout.as_secs(),
        "Factlens starting"
    );

    if config.classifier.model_path.is_none() {
        tracing::warn!("No FACTLENS_CLASSIFIER_PATH configured, running classifier in stub mode");
    }
    let classifier = SentimentClassifier::load(config.classifier.clone())?;

    let lexicon = Lexicon::builtin();
    tracing::info!(version = lexicon.version(), "Lexicon loaded");

    let analyzer = Analyzer::new(lexicon, classifier, config.policy.clone());

    let metadata_fetcher = HttpFetcher::new(&FetchConfig::metadata(
        config.fetch_timeout,
        config.user_agent.clone(),
    ))?;
    let preview_fetcher = HttpFetcher::new(&FetchConfig::browser(config.fetch_timeout))?;

    let state = HandlerState::new(analyzer.clone(), metadata_fetcher, preview_fetcher);
    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(analyzer))
        .await?;

    tracing::info!("Factlens shutdown complete");
    Ok(())
}

fn run_health_check() -> i32 {
    let port = std::env::var("FACTLENS_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let url = format!("http://127.0.0.1:{}/healthz", port);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build runtime");

    rt.block_on(async {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(1))
            .build()
            .expect("failed to build client");

        match client.get(&url).send().await {
            Ok(res) if res.status().is_success() => 0,
            _ => 1,
        }
    })
}

async fn shutdown_signal(analyzer: Analyzer<SentimentClassifier>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }

    analyzer.teardown();
}
