pub mod assertions;
pub mod fixtures;

use std::sync::Arc;

use anyhow::Context as _;
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use mercato::{api::create_router, db::MemoryCatalogStore, state::AppState, Config};
use serde_json::Value;
use tower::ServiceExt as _;

pub use assertions::*;
pub use fixtures::*;

/// The full router wired over an in-memory store. The API is read-only, so
/// the harness only ever issues GETs.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryCatalogStore>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(|_| {})
    }

    pub fn with_config(configure: impl FnOnce(&mut Config)) -> Self {
        let mut config = Config::default();
        configure(&mut config);

        let store = Arc::new(
            MemoryCatalogStore::new().with_case_insensitive(config.search.case_insensitive),
        );
        let state = AppState::with_store(config, store.clone());

        Self {
            router: create_router(state),
            store,
        }
    }

    /// GET `path_and_query`, returning status, headers, and raw body.
    pub async fn get(
        &self,
        path_and_query: &str,
    ) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        let request = Request::get(path_and_query)
            .header("host", "example.org")
            .header("accept", "application/json")
            .body(Body::empty())
            .context("build request")?;

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .context("dispatch request")?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .context("read response body")?;

        Ok((status, headers, body))
    }

    /// GET `path_and_query` and parse the body as JSON.
    pub async fn get_json(&self, path_and_query: &str) -> anyhow::Result<(StatusCode, Value)> {
        let (status, _headers, body) = self.get(path_and_query).await?;
        let value = serde_json::from_slice(&body)
            .with_context(|| format!("parse JSON response from {path_and_query}"))?;
        Ok((status, value))
    }
}
