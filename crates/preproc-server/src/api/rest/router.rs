//! Router creation and configuration

use super::extractors::{require_admin, require_super_admin};
use super::handlers::*;
use super::types::AppState;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create REST API router
///
/// Role gates are route layers, so they run before any body is parsed.
pub fn create_router(state: AppState) -> Router {
    let assistant = Router::new()
        .route("/v1/assistant/generate", post(generate))
        .route("/v1/assistant/validate", post(validate))
        .route("/v1/assistant/test", post(test_steps))
        .route("/v1/assistant/info", get(info))
        .route_layer(middleware::from_fn(require_admin));

    let config = Router::new()
        .route("/v1/config", get(get_config).put(update_config))
        .route_layer(middleware::from_fn(require_super_admin));

    Router::new()
        .route("/health", get(health))
        .merge(assistant)
        .merge(config)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
