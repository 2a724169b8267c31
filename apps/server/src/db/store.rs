//! PostgreSQL storage backend

use crate::{
    config::{DatabaseConfig, SearchConfig},
    db::search::{query_builder::PRODUCT_SELECT, BindValue, ProductQueryBuilder, SearchFilters},
    db::traits::{CategoryStore, ProductStore},
    models::{Category, CategoryRef, Product, ProductImage},
    Error, Result,
};
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;
use uuid::Uuid;

/// Create the connection pool from database settings.
///
/// Every connection gets session-level statement and lock timeouts so a
/// slow query cannot pin a pool slot indefinitely.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let statement_timeout = config.statement_timeout_seconds;
    let lock_timeout = config.lock_timeout_seconds;

    let pool = PgPoolOptions::new()
        .min_connections(config.pool_min_size)
        .max_connections(config.pool_max_size)
        .acquire_timeout(Duration::from_secs(config.pool_timeout_seconds))
        .after_connect(move |conn, _meta| {
            Box::pin(async move {
                sqlx::query(&format!("SET statement_timeout = '{statement_timeout}s'"))
                    .execute(&mut *conn)
                    .await?;
                sqlx::query(&format!("SET lock_timeout = '{lock_timeout}s'"))
                    .execute(&mut *conn)
                    .await?;
                Ok(())
            })
        })
        .connect(&config.url)
        .await?;

    Ok(pool)
}

/// Apply embedded migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| Error::Internal(format!("Migration failed: {e}")))?;
    Ok(())
}

/// PostgreSQL-backed catalog store.
#[derive(Clone)]
pub struct PostgresCatalogStore {
    pool: PgPool,
    search_config: SearchConfig,
}

impl PostgresCatalogStore {
    pub fn new(pool: PgPool, search_config: SearchConfig) -> Self {
        Self {
            pool,
            search_config,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn builder(&self, filters: &SearchFilters) -> ProductQueryBuilder {
        ProductQueryBuilder::new(filters)
            .with_case_insensitive(self.search_config.case_insensitive)
    }
}

fn bind_all<'q>(
    mut query: sqlx::query::Query<'q, sqlx::Postgres, sqlx::postgres::PgArguments>,
    bind_values: Vec<BindValue>,
) -> sqlx::query::Query<'q, sqlx::Postgres, sqlx::postgres::PgArguments> {
    for value in bind_values {
        query = match value {
            BindValue::Text(v) => query.bind(v),
            BindValue::Bool(v) => query.bind(v),
            BindValue::Decimal(v) => query.bind(v),
            BindValue::UuidArray(vs) => query.bind(vs),
        };
    }
    query
}

fn product_from_row(row: &PgRow) -> Result<Product> {
    let images: JsonValue = row.try_get("images")?;
    let categories: JsonValue = row.try_get("categories")?;

    let images: Vec<ProductImage> = serde_json::from_value(images)
        .map_err(|e| Error::Internal(format!("Invalid images payload in product row: {e}")))?;
    let categories: Vec<CategoryRef> = serde_json::from_value(categories)
        .map_err(|e| Error::Internal(format!("Invalid categories payload in product row: {e}")))?;

    Ok(Product {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        price: row.try_get("price")?,
        rating: row.try_get("rating")?,
        in_stock: row.try_get("in_stock")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
        images,
        categories,
    })
}

#[async_trait]
impl ProductStore for PostgresCatalogStore {
    async fn search_page(
        &self,
        filters: &SearchFilters,
        offset: u64,
        limit: u32,
    ) -> Result<Vec<Product>> {
        let (sql, bind_values) = self.builder(filters).with_page(offset, limit).build_sql();

        let rows = bind_all(sqlx::query(&sql), bind_values)
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)?;

        rows.iter().map(product_from_row).collect()
    }

    async fn count(&self, filters: &SearchFilters) -> Result<u64> {
        let (sql, bind_values) = self.builder(filters).build_count_sql();

        let mut query = sqlx::query_scalar::<_, i64>(&sql);
        for value in bind_values {
            query = match value {
                BindValue::Text(v) => query.bind(v),
                BindValue::Bool(v) => query.bind(v),
                BindValue::Decimal(v) => query.bind(v),
                BindValue::UuidArray(vs) => query.bind(vs),
            };
        }

        let total = query
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(total.max(0) as u64)
    }

    async fn read(&self, id: Uuid) -> Result<Option<Product>> {
        let sql = format!("{PRODUCT_SELECT} WHERE p.id = $1");

        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?;

        row.as_ref().map(product_from_row).transpose()
    }
}

#[async_trait]
impl CategoryStore for PostgresCatalogStore {
    async fn list(&self) -> Result<Vec<Category>> {
        let rows = sqlx::query(
            "SELECT id, name, created_at, updated_at FROM categories ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        rows.iter()
            .map(|row| {
                Ok(Category {
                    id: row.try_get("id")?,
                    name: row.try_get("name")?,
                    created_at: row.try_get("created_at")?,
                    updated_at: row.try_get("updated_at")?,
                })
            })
            .collect()
    }
}
