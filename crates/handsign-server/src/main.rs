//! Handsign Server
//!
//! HTTP inference endpoint for hand-gesture classification. At startup the
//! model artifact is resolved (fetched from its remote source if absent) and
//! loaded exactly once; requests then share the resulting predictor
//! read-only for the life of the process.

use anyhow::Result;
use clap::Parser;
use handsign_core::{ensure_artifact_present, load_predictor_with_fallback};
use handsign_server::{create_router, AppState, Cli, ServerConfig};
use std::net::SocketAddr;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    info!("Starting Handsign inference server");

    let config = ServerConfig::load(&cli.config, &cli)?;
    info!("Model artifact: {}", config.model_path);
    info!("Model source:   {}", config.model_url);

    // A failed fetch is not fatal: the loader falls back and the service
    // stays available in degraded mode.
    if let Err(e) = ensure_artifact_present(&config.model_path, &config.model_url).await {
        warn!(error = %e, "could not fetch model artifact");
    }

    let predictor = load_predictor_with_fallback(&config.model_path, &config.fallback_label);
    if predictor.is_fallback() {
        warn!(
            label = %config.fallback_label,
            "serving with constant-label fallback predictor"
        );
    }

    let app = create_router(AppState::new(predictor));

    let addr: SocketAddr = format!("{}:{}", config.listen, config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
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
        EnvFilter::new("handsign_core=debug,handsign_server=debug,tower_http=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("handsign_core=info,handsign_server=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
