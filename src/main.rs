//! Beacon Presence Monitor - Binary Entry Point
//!
//! Starts the HTTP server that scanners post to and dashboards read from.

use std::sync::Arc;

use axum::http::Request;
use tower_http::trace::TraceLayer;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use beacon_presence::api::{create_router, AppState};
use beacon_presence::utils::remove_temp_for;
use beacon_presence::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let state = Arc::new(AppState::new(config.store.clone()));

    // Make sure the log and backup directory exist before the first request
    state.store.ensure_exists()?;
    std::fs::create_dir_all(config.store.backup_dir())?;

    let mut cleaned = state.backups.cleanup_partial_backups()?;
    if remove_temp_for(config.store.log_file())? {
        cleaned += 1;
    }
    if cleaned > 0 {
        tracing::warn!(count = cleaned, "removed leftover temp files");
    }

    let app = create_router(state).layer(TraceLayer::new_for_http().make_span_with(
        |request: &Request<_>| {
            tracing::span!(
                Level::INFO,
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
            )
        },
    ));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "presence server ready");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
