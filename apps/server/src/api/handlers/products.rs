//! Product endpoint handlers
//!
//! Handles catalog search and single-product reads:
//! - GET /api/products?q=&category=&minPrice=&maxPrice=&inStock=&sort=&method=&page=&pageSize=
//! - GET /api/products/{id}

use crate::{
    api::envelope::ApiResponse,
    models::Product,
    state::AppState,
    Result,
};
use axum::{
    extract::{Path, RawQuery, State},
    response::Json,
};
use uuid::Uuid;

/// Search the product catalog.
///
/// Repeated `category` parameters accumulate; unknown parameters are
/// ignored. Malformed values reject the whole request with 400.
pub async fn search_products(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<ApiResponse<Vec<Product>>>> {
    let items = parse_form_urlencoded(raw_query.as_deref().unwrap_or(""));

    let result = state.product_service.search(&items).await?;

    Ok(Json(ApiResponse::paginated(
        "Products retrieved successfully",
        result.data,
        result.pagination,
    )))
}

/// Read one product by id. Returns the bare product object.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| crate::Error::Validation(format!("Invalid product id: {id}")))?;

    let product = state.product_service.get(id).await?;
    Ok(Json(product))
}

fn parse_form_urlencoded(s: &str) -> Vec<(String, String)> {
    // `url::form_urlencoded` implements `application/x-www-form-urlencoded`
    // semantics (including '+' = space).
    url::form_urlencoded::parse(s.as_bytes())
        .into_owned()
        .collect()
}
