//! API module for HTTP endpoints
//!
//! Scanner ingestion, JSON read views and log management.

pub mod http;
pub mod rest;
pub mod state;

pub use http::create_router;
pub use state::AppState;
