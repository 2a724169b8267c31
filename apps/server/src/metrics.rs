//! Prometheus collectors for the catalog server
//!
//! Everything registers against the default registry at first use and is
//! served by the scrape handler in `api::handlers::metrics`.

use lazy_static::lazy_static;
use prometheus::{
    register_histogram, register_histogram_vec, register_int_counter_vec, register_int_gauge,
    register_int_gauge_vec, Histogram, HistogramVec, IntCounterVec, IntGauge, IntGaugeVec,
};

lazy_static! {
    /// Requests served, by method, sanitized path, and status code.
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "catalog_http_requests_total",
        "HTTP requests served",
        &["method", "path", "status"]
    )
    .expect("Failed to register HTTP_REQUESTS_TOTAL");

    /// Wall-clock latency per request.
    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "catalog_http_request_duration_seconds",
        "HTTP request latency in seconds",
        &["method", "path"],
        vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]
    )
    .expect("Failed to register HTTP_REQUEST_DURATION_SECONDS");

    /// Requests currently inside the handler stack.
    pub static ref HTTP_REQUESTS_IN_FLIGHT: IntGaugeVec = register_int_gauge_vec!(
        "catalog_http_requests_in_flight",
        "HTTP requests currently in flight",
        &["method", "path"]
    )
    .expect("Failed to register HTTP_REQUESTS_IN_FLIGHT");

    /// Search calls by outcome ("success" or "error").
    pub static ref SEARCH_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "catalog_search_requests_total",
        "Product search operations",
        &["status"]
    )
    .expect("Failed to register SEARCH_REQUESTS_TOTAL");

    /// Page sizes actually returned by searches.
    pub static ref SEARCH_RESULTS: Histogram = register_histogram!(
        "catalog_search_results",
        "Products returned per search page",
        vec![0.0, 1.0, 5.0, 10.0, 20.0, 50.0, 100.0]
    )
    .expect("Failed to register SEARCH_RESULTS");

    /// Pool connections handed out, sampled at scrape time.
    pub static ref DB_CONNECTIONS_ACTIVE: IntGauge = register_int_gauge!(
        "catalog_db_connections_active",
        "Database connections in use"
    )
    .expect("Failed to register DB_CONNECTIONS_ACTIVE");

    /// Pool connections waiting for work, sampled at scrape time.
    pub static ref DB_CONNECTIONS_IDLE: IntGauge = register_int_gauge!(
        "catalog_db_connections_idle",
        "Idle database connections"
    )
    .expect("Failed to register DB_CONNECTIONS_IDLE");
}

/// Collapse UUID path segments to `{id}` so labels stay low-cardinality.
pub fn sanitize_path(path: &str) -> String {
    path.split('/')
        .map(|segment| {
            if uuid::Uuid::parse_str(segment).is_ok() {
                "{id}"
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}
