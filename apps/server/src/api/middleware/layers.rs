//! Reusable tower-http layers for the router

use axum::http::HeaderValue;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// HTTP trace layer
///
/// Emits per-request debug events under the `tower_http` target. The
/// request_id middleware owns the info-level completion log.
pub fn trace() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
}

/// CORS layer built from the configured origin list
///
/// An empty or entirely unparseable origin list yields a layer that sets
/// no CORS headers.
pub fn cors(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    if allowed.is_empty() {
        return CorsLayer::new();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Response compression layer
pub fn compression() -> CompressionLayer {
    CompressionLayer::new()
}
