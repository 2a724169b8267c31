//! In-memory storage backend
//!
//! Mirrors the PostgreSQL store's filter, sort, and pagination semantics
//! over plain vectors. Used by tests and local development setups that
//! run without a database.

use crate::{
    db::search::{SearchFilters, SortDirection, SortKey},
    db::traits::{CategoryStore, ProductStore},
    models::{Category, Product},
    Result,
};
use async_trait::async_trait;
use std::cmp::Ordering;
use std::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct MemoryCatalogStore {
    products: RwLock<Vec<Product>>,
    categories: RwLock<Vec<Category>>,
    case_insensitive: bool,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    pub fn insert_product(&self, product: Product) {
        self.products.write().unwrap().push(product);
    }

    pub fn insert_category(&self, category: Category) {
        self.categories.write().unwrap().push(category);
    }

    fn matches(&self, product: &Product, filters: &SearchFilters) -> bool {
        if let Some(q) = &filters.q {
            let hit = if self.case_insensitive {
                let q = q.to_lowercase();
                product.name.to_lowercase().contains(&q)
                    || product.description.to_lowercase().contains(&q)
            } else {
                product.name.contains(q.as_str()) || product.description.contains(q.as_str())
            };
            if !hit {
                return false;
            }
        }

        if !filters.categories.is_empty() {
            let member = product
                .categories
                .iter()
                .any(|c| filters.categories.contains(&c.id));
            if !member {
                return false;
            }
        }

        if let Some(min_price) = filters.min_price {
            if product.price < min_price {
                return false;
            }
        }

        if let Some(max_price) = filters.max_price {
            if product.price > max_price {
                return false;
            }
        }

        if let Some(in_stock) = filters.in_stock {
            if product.in_stock != in_stock {
                return false;
            }
        }

        true
    }
}

fn compare(a: &Product, b: &Product, sort: SortKey, direction: SortDirection) -> Ordering {
    // Relevance has no scoring; it orders by recency and ignores the
    // requested direction.
    let (ord, direction) = match sort {
        SortKey::Relevance => (a.created_at.cmp(&b.created_at), SortDirection::Desc),
        SortKey::Price => (a.price.cmp(&b.price), direction),
        SortKey::CreatedAt => (a.created_at.cmp(&b.created_at), direction),
        SortKey::Rating => (a.rating.cmp(&b.rating), direction),
    };

    // Id tiebreak follows the sort direction, as in the SQL ORDER BY.
    let ord = ord.then_with(|| a.id.cmp(&b.id));
    match direction {
        SortDirection::Asc => ord,
        SortDirection::Desc => ord.reverse(),
    }
}

#[async_trait]
impl ProductStore for MemoryCatalogStore {
    async fn search_page(
        &self,
        filters: &SearchFilters,
        offset: u64,
        limit: u32,
    ) -> Result<Vec<Product>> {
        let products = self.products.read().unwrap();

        let mut matched: Vec<Product> = products
            .iter()
            .filter(|p| self.matches(p, filters))
            .cloned()
            .collect();
        matched.sort_by(|a, b| compare(a, b, filters.sort, filters.direction));

        Ok(matched
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self, filters: &SearchFilters) -> Result<u64> {
        let products = self.products.read().unwrap();
        Ok(products.iter().filter(|p| self.matches(p, filters)).count() as u64)
    }

    async fn read(&self, id: Uuid) -> Result<Option<Product>> {
        let products = self.products.read().unwrap();
        Ok(products.iter().find(|p| p.id == id).cloned())
    }
}

#[async_trait]
impl CategoryStore for MemoryCatalogStore {
    async fn list(&self) -> Result<Vec<Category>> {
        let mut categories = self.categories.read().unwrap().clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }
}
