//! Category listing service

use crate::{
    db::CategoryStore,
    models::Category,
    Result,
};
use std::sync::Arc;

/// Category service exposes the category reference data.
pub struct CategoryService {
    store: Arc<dyn CategoryStore>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn CategoryStore>) -> Self {
        Self { store }
    }

    /// List all categories.
    ///
    /// GET /api/categories
    pub async fn list(&self) -> Result<Vec<Category>> {
        self.store.list().await
    }
}
