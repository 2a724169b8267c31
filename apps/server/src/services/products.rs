//! Product search service
//!
//! Orchestrates product operations by:
//! - Parsing query items into search filters
//! - Resolving pagination (defaults and clamps) against configured limits
//! - Running the page and count queries against the store

use crate::{
    config::SearchConfig,
    db::{search::SearchFilters, ProductStore},
    metrics,
    models::{PageMeta, Paginated, Product},
    Error, Result,
};
use std::sync::Arc;
use uuid::Uuid;

/// Product service coordinates catalog search and lookups.
pub struct ProductService {
    store: Arc<dyn ProductStore>,
    default_page_size: u32,
    max_page_size: u32,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>, search_config: &SearchConfig) -> Self {
        Self {
            store,
            default_page_size: search_config.default_page_size,
            max_page_size: search_config.max_page_size,
        }
    }

    /// Search the catalog.
    ///
    /// GET /api/products?params
    pub async fn search(&self, query_items: &[(String, String)]) -> Result<Paginated<Product>> {
        let filters = SearchFilters::from_items(query_items)?;

        let result = self.run_search(&filters).await;

        let status = if result.is_ok() { "ok" } else { "error" };
        metrics::SEARCH_REQUESTS_TOTAL
            .with_label_values(&[status])
            .inc();

        result
    }

    async fn run_search(&self, filters: &SearchFilters) -> Result<Paginated<Product>> {
        let page = filters.effective_page();
        let page_size = filters.effective_page_size(self.default_page_size, self.max_page_size);
        let offset = filters.offset(self.default_page_size, self.max_page_size);

        // Page and count run against the same predicate so the total always
        // describes the filtered set being paged.
        let data = self.store.search_page(filters, offset, page_size).await?;
        let total = self.store.count(filters).await?;

        metrics::SEARCH_RESULTS.observe(data.len() as f64);

        Ok(Paginated {
            data,
            pagination: PageMeta::new(page, page_size, total),
        })
    }

    /// Read one product.
    ///
    /// GET /api/products/{id}
    pub async fn get(&self, id: Uuid) -> Result<Product> {
        self.store.read(id).await?.ok_or(Error::ProductNotFound)
    }
}
