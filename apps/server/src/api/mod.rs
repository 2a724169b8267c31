//! HTTP surface: router assembly, handlers, middleware, and envelopes

pub mod envelope;
pub mod handlers;
pub mod middleware;
pub mod routes;

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde_json::json;

use crate::state::AppState;

/// Assemble the application router.
///
/// Later layers wrap earlier ones, so a request passes the body limit,
/// trace, CORS, and compression layers before the metrics, request-id,
/// and security-header functions that sit closest to the handlers.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.server.max_request_body_size;
    let cors_origins = state.config.server.cors_origins.clone();

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/favicon.ico", get(favicon))
        .route("/metrics", get(handlers::metrics_handler))
        .nest("/api", routes::catalog::catalog_routes())
        .with_state(state)
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(axum::middleware::from_fn(middleware::metrics_middleware))
        .layer(middleware::compression())
        .layer(middleware::cors(&cors_origins))
        .layer(middleware::trace())
        .layer(DefaultBodyLimit::max(body_limit))
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok", "service": "catalog-server" }))
}

// Informational banner, not part of the catalog API.
async fn root() -> impl IntoResponse {
    Json(json!({
        "server": "Product Catalog (Rust)",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

// Browsers probe for this; answering 204 keeps 404s out of the logs.
async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}
