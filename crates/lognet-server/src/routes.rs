//! Route configuration for the logging service API.

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    clear_log_queue, clear_logs, clear_service_logs, get_all, get_log_queue, get_services, ping,
    retrieve_logs, submit_log,
};
use crate::state::ServiceState;

/// Create the logging service router.
///
/// The ping and log paths come from the state's [`ApiSettings`]; the rest
/// of the surface is fixed.
///
/// [`ApiSettings`]: lognet_core::ApiSettings
pub fn create_router(state: Arc<ServiceState>) -> Router {
    let cors = build_cors_layer(state.config());
    let api = &state.config().api;

    Router::new()
        // Health check and submission, on configurable paths
        .route(&format!("/{}", api.ping_path), get(ping))
        .route(&format!("/{}", api.log_path), post(submit_log))
        // Query endpoints
        .route("/services", get(get_services))
        .route("/retrieve", get(retrieve_logs))
        .route("/get-all", get(get_all))
        .route("/get-log-queue", get(get_log_queue))
        // Clearing endpoints
        .route("/clear-logs", delete(clear_logs))
        .route("/clear-service-logs", delete(clear_service_logs))
        .route("/clear-log-queue", delete(clear_log_queue))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Build the CORS layer based on configuration.
fn build_cors_layer(config: &crate::config::ServerConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
