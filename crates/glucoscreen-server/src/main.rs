//! GlucoScreen Server
//!
//! HTTP serving layer over the pre-trained diabetes risk classifier.
//!
//! Deserializes the scaler and classifier artifacts once at startup, then
//! serves screening predictions until shutdown. The artifacts are produced
//! by the offline training pipeline and are read-only inputs here.

use anyhow::Result;
use clap::Parser;
use metrics_exporter_prometheus::PrometheusHandle;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{info, warn};

use glucoscreen_server::cli::Cli;
use glucoscreen_server::config::ServerConfig;
use glucoscreen_server::routes;
use glucoscreen_server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose);

    info!("Starting GlucoScreen server");

    // Load configuration
    let config = ServerConfig::load(&cli.config, &cli)?;
    info!("Configuration loaded successfully");
    info!("Classifier weights: {}", config.model_path);
    info!("Scaler: {}", config.scaler_path);

    // Initialize metrics
    let metrics_handle = init_metrics()?;

    // Load artifacts before binding; a bad artifact must abort startup.
    info!("Initializing application state...");
    let state = AppState::new(config, metrics_handle)?;
    info!("Application state initialized successfully");

    let addr: SocketAddr = format!("{}:{}", cli.listen, cli.port).parse()?;
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    // Graceful shutdown handler
    let shutdown = async {
        shutdown_signal().await;
        warn!("Shutdown signal received, stopping server...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Listen for shutdown signals (SIGTERM, SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Initialize tracing/logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("glucoscreen_server=debug,glucoscreen_model=debug,tower_http=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("glucoscreen_server=info,glucoscreen_model=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Initialize metrics exporter and return handle for rendering
fn init_metrics() -> Result<PrometheusHandle> {
    use metrics_exporter_prometheus::PrometheusBuilder;

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics: {}", e))?;

    metrics::describe_counter!(
        "glucoscreen_requests_total",
        "Total number of screening requests received"
    );
    metrics::describe_counter!(
        "glucoscreen_predictions_total",
        "Total number of predictions by label"
    );
    metrics::describe_histogram!(
        "glucoscreen_inference_latency_us",
        metrics::Unit::Microseconds,
        "Single-request inference latency in microseconds"
    );
    metrics::describe_counter!(
        "glucoscreen_errors_total",
        "Total number of request errors"
    );

    info!("Metrics exporter initialized");
    Ok(handle)
}
