//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Request bodies are a handful of fields.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // The forms are served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Registry
        .route("/units", get(handlers::list_units))
        .route("/units/{dimension}/canonical", get(handlers::get_canonical_unit))
        // Conversion
        .route("/convert", post(handlers::convert))
        .route("/canonical", post(handlers::to_canonical))
        .route("/display", post(handlers::display))
        .route("/parse", post(handlers::parse));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
