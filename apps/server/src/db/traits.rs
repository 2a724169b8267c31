//! Core traits for catalog storage backends

use crate::{
    db::search::SearchFilters,
    models::{Category, Product},
    Result,
};
use async_trait::async_trait;
use uuid::Uuid;

/// Storage trait for product reads.
///
/// This trait defines the read operations the search API needs. Any
/// storage backend (PostgreSQL, in-memory, etc.) can implement this
/// trait, which keeps the HTTP layer testable without a database.
///
/// Pagination is resolved by the caller: `offset` and `limit` arrive
/// already clamped, and implementations apply them as given.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Fetch one page of products matching the filters.
    ///
    /// # Arguments
    /// * `filters` - Parsed search filters
    /// * `offset` - Number of matching rows to skip
    /// * `limit` - Maximum number of rows to return
    ///
    /// # Returns
    /// The matching products in sort order, with images and categories
    /// attached.
    async fn search_page(
        &self,
        filters: &SearchFilters,
        offset: u64,
        limit: u32,
    ) -> Result<Vec<Product>>;

    /// Count every product matching the filters, ignoring pagination.
    ///
    /// Must apply the exact same predicate as [`search_page`](Self::search_page)
    /// so totals stay consistent with page contents.
    async fn count(&self, filters: &SearchFilters) -> Result<u64>;

    /// Read a single product by id.
    ///
    /// # Returns
    /// * `Ok(Some(product))` - Product found
    /// * `Ok(None)` - No such product
    async fn read(&self, id: Uuid) -> Result<Option<Product>>;
}

/// Storage trait for category reads.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// List all categories ordered by name.
    async fn list(&self) -> Result<Vec<Category>>;
}
