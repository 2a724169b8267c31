//! Request ID middleware
//!
//! Every response carries a server-assigned `x-request-id`. When the client
//! sent its own id, it is echoed back as `x-correlation-id` so the two sides
//! can be joined in logs.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use std::time::Instant;
use tracing::Span;
use uuid::Uuid;

/// Wraps each request in a root span carrying the generated request id.
#[tracing::instrument(
    name = "http_request",
    skip_all,
    fields(
        http.method = %req.method(),
        http.route = %req.uri().path(),
        http.response.status_code = tracing::field::Empty,
        request_id = tracing::field::Empty,
    )
)]
pub async fn request_id_middleware(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let request_id = Uuid::new_v4().to_string();
    Span::current().record("request_id", &request_id);

    let inbound_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let method = req.method().clone();
    let path = req.uri().path().to_string();
    tracing::debug!(method = %method, path = %path, request_id = %request_id, "Received request");

    let mut response = next.run(req).await;

    let status = response.status().as_u16();
    Span::current().record("http.response.status_code", status);
    tracing::info!(
        method = %method,
        path = %path,
        status = %status,
        duration_ms = started.elapsed().as_millis(),
        request_id = %request_id,
        "Finished request"
    );

    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        headers.insert("x-request-id", value);
    }
    if let Some(client_id) = inbound_id.filter(|id| *id != request_id) {
        if let Ok(value) = HeaderValue::from_str(&client_id) {
            headers.insert("x-correlation-id", value);
        }
    }

    response
}
