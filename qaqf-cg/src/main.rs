//! qaqf-cg (Course Generator) - QAQF course wizard service
//!
//! Serves wizard sessions and course generation over HTTP.
//! Configuration resolves CLI → environment → TOML file → built-in default.

use anyhow::{Context, Result};
use clap::Parser;
use qaqf_common::config::{self, CliOverrides, ServiceSettings};
use qaqf_cg::generation::{GenerationTrigger, HttpContentGenerator};
use qaqf_cg::wizard::SessionStore;
use qaqf_cg::{build_router, AppState};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for qaqf-cg
#[derive(Parser, Debug)]
#[command(name = "qaqf-cg")]
#[command(about = "QAQF course generator service")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Path to a TOML config file
    #[arg(short, long, env = config::CONFIG_PATH_ENV)]
    config: Option<PathBuf>,

    /// Content-generation endpoint URL
    #[arg(long)]
    generation_endpoint: Option<String>,

    /// Log level used when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let toml_config = config::load_or_default(args.config.as_deref());
    let cli = CliOverrides {
        port: args.port,
        generation_endpoint: args.generation_endpoint,
        log_level: args.log_level,
    };
    let settings = ServiceSettings::resolve(&cli, &toml_config)
        .context("Failed to resolve configuration")?;

    let default_filter = config::log_filter_directives(&settings.log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting QAQF Course Generator (qaqf-cg) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    info!(
        endpoint = %settings.generation_endpoint,
        timeout_secs = settings.generation_timeout.as_secs(),
        token_configured = settings.generation_token.is_some(),
        "Content generation configured"
    );

    let generator = HttpContentGenerator::new(
        settings.generation_endpoint.clone(),
        settings.generation_timeout,
        settings.generation_token.clone(),
    )
    .context("Failed to build HTTP client")?;

    let sessions = SessionStore::new(settings.max_sessions);
    let sweep_every = settings.session_idle_timeout.min(Duration::from_secs(60));
    sessions.spawn_sweeper(settings.session_idle_timeout, sweep_every);
    info!(
        idle_timeout_secs = settings.session_idle_timeout.as_secs(),
        max_sessions = settings.max_sessions,
        "Wizard session eviction enabled"
    );

    let state = AppState::with_sessions(GenerationTrigger::new(Arc::new(generator)), sessions);
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("qaqf-cg listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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
