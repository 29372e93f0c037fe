//! artistly-web - HTTP service for the ArTistLy artist booking directory
//!
//! Configuration priority: CLI arguments > environment > TOML file > defaults.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, reload, util::SubscriberInitExt};

use artistly_common::config::load_config;
use artistly_web::{build_router, log_filter, AppState};

/// Command-line arguments for artistly-web
#[derive(Parser, Debug)]
#[command(name = "artistly-web")]
#[command(about = "Artist booking directory service")]
#[command(version)]
struct Args {
    /// Path to TOML config file (also ARTISTLY_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to bind, overrides [server].host
    #[arg(long, env = "ARTISTLY_HOST")]
    host: Option<String>,

    /// Port to listen on, overrides [server].port
    #[arg(short, long, env = "ARTISTLY_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let rust_log = std::env::var("RUST_LOG").ok();

    // Installed before config loading; [logging].level is applied by reload
    let (filter, filter_handle) = reload::Layer::new(log_filter(rust_log.as_deref(), "info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting ArTistLy (artistly-web) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let mut config = load_config(args.config.as_deref()).context("Failed to load configuration")?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate().context("Invalid configuration")?;

    filter_handle
        .reload(log_filter(rust_log.as_deref(), &config.logging.level))
        .context("Failed to apply log level")?;

    info!(
        "Onboarding submission delay: {}ms",
        config.onboarding.submission_delay_ms
    );

    let state = AppState::seeded(&config);
    info!(
        "Loaded {} artists and {} applications",
        state.artists.len(),
        state.board.read().await.all().len()
    );
    let app = build_router(state);

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("artistly-web listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
