//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api;
use crate::models::AppConfig;
use crate::services::{FilterRunner, ResultEncoder};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub runner: Arc<FilterRunner>,
}

/// Create application state from a configuration.
pub fn create_app_state(config: AppConfig) -> AppState {
    let encoder = ResultEncoder::new(config.jpeg_quality);
    AppState {
        config: Arc::new(config),
        runner: Arc::new(FilterRunner::new(encoder)),
    }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.max_upload_bytes;

    Router::new()
        .route("/upload", post(api::handle_upload))
        .route("/download/:filter_name", post(api::handle_download))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .layer(DefaultBodyLimit::max(max_upload))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // Browser clients post uploads cross-origin.
        .layer(CorsLayer::permissive())
}
