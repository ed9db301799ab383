//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use super::rest::{backups, beacons, duration, events, ingest, rooms};
use super::state::AppState;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // Scanners and dashboards post from anywhere on the LAN
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Scanner ingestion
        .route("/log", post(ingest::log_event))
        // Read views
        .route("/api/events", get(events::list_events))
        .route("/api/beacons", get(beacons::list_beacons))
        .route("/api/rooms", get(rooms::list_rooms))
        .route("/api/duration/:beacon_id", get(duration::get_duration))
        // Management
        .route(
            "/api/backups",
            get(backups::list_backups).post(backups::create_backup),
        )
        .route("/api/backups/:name/restore", post(backups::restore_backup))
        .route("/api/clear", post(backups::clear_logs))
        .route("/clear", post(backups::manage))
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
