//! Web server adapter.
//!
//! Exposes the roster selection over a single JSON read endpoint.

mod error;
mod handlers;

pub use error::{status_from_error, WebError};
pub use handlers::*;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::ports::snapshot_port::SnapshotPort;

pub const MAGNIFICENCE_PATH: &str = "/get-magnificence-data/";

pub struct AppState {
    pub snapshot_port: Arc<dyn SnapshotPort + Send + Sync>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(MAGNIFICENCE_PATH, get(handlers::magnificence_data))
        .fallback(handlers::not_found)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(Arc::new(state))
}
