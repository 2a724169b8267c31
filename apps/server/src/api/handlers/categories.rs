//! Category endpoint handlers

use crate::{api::envelope::ApiResponse, models::Category, state::AppState, Result};
use axum::{extract::State, response::Json};

/// List all categories.
///
/// GET /api/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Category>>>> {
    let categories = state.category_service.list().await?;

    Ok(Json(ApiResponse::ok(
        "Categories retrieved successfully",
        categories,
    )))
}
