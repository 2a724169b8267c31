//! Prometheus scrape handler

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use prometheus::{Encoder, TextEncoder};

use crate::metrics::{DB_CONNECTIONS_ACTIVE, DB_CONNECTIONS_IDLE};
use crate::state::AppState;

/// Serves the default registry in text exposition format.
///
/// Pool gauges are point-in-time values, so they are refreshed here rather
/// than on every request.
pub async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    if let Some(pool) = &state.db_pool {
        let size = pool.size() as i64;
        let idle = pool.num_idle() as i64;
        DB_CONNECTIONS_ACTIVE.set(size - idle);
        DB_CONNECTIONS_IDLE.set(idle);
    }

    let mut body = Vec::new();
    let encoder = TextEncoder::new();
    match encoder.encode(&prometheus::gather(), &mut body) {
        Ok(()) => (
            StatusCode::OK,
            [("Content-Type", "text/plain; version=0.0.4; charset=utf-8")],
            body,
        ),
        Err(e) => {
            tracing::error!(error = %e, "Metrics encoding failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [("Content-Type", "text/plain")],
                b"metrics encoding failed".to_vec(),
            )
        }
    }
}
