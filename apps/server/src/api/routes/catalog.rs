//! Catalog API Routes
//!
//! Read-only endpoints for product search, product reads, and category
//! listing. URLs are case-sensitive and both trailing-slash forms are
//! registered directly rather than via redirects.

use crate::api::handlers::{categories, products};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        // Product search (with and without trailing slash)
        .route("/products", get(products::search_products))
        .route("/products/", get(products::search_products))
        // Single product reads
        .route("/products/:id", get(products::get_product))
        .route("/products/:id/", get(products::get_product))
        // Category listing
        .route("/categories", get(categories::list_categories))
        .route("/categories/", get(categories::list_categories))
}
