//! Application state shared across request handlers

use crate::{
    config::Config,
    db::{self, CategoryStore, PostgresCatalogStore, ProductStore},
    services::{CategoryService, ProductService},
    Result,
};
use sqlx::PgPool;
use std::sync::Arc;

/// Shared application state.
///
/// Cheap to clone; every field is an `Arc` or pool handle.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Present when the state is backed by PostgreSQL. Tests running over
    /// an in-memory store have no pool.
    pub db_pool: Option<PgPool>,
    pub product_service: Arc<ProductService>,
    pub category_service: Arc<CategoryService>,
}

impl AppState {
    /// Connect to PostgreSQL, run migrations when configured, and build the
    /// service graph.
    pub async fn new(config: Config) -> Result<Self> {
        let pool = db::create_pool(&config.database).await?;

        if config.database.run_migrations {
            db::run_migrations(&pool).await?;
            tracing::info!("Database migrations applied");
        }

        let store = Arc::new(PostgresCatalogStore::new(
            pool.clone(),
            config.search.clone(),
        ));

        Ok(Self::assemble(config, Some(pool), store.clone(), store))
    }

    /// Build state over any storage backend.
    ///
    /// Used by tests to drive the full router without a database.
    pub fn with_store<S>(config: Config, store: Arc<S>) -> Self
    where
        S: ProductStore + CategoryStore + 'static,
    {
        Self::assemble(config, None, store.clone(), store)
    }

    fn assemble(
        config: Config,
        db_pool: Option<PgPool>,
        products: Arc<dyn ProductStore>,
        categories: Arc<dyn CategoryStore>,
    ) -> Self {
        let product_service = Arc::new(ProductService::new(products, &config.search));
        let category_service = Arc::new(CategoryService::new(categories));

        Self {
            config: Arc::new(config),
            db_pool,
            product_service,
            category_service,
        }
    }
}
