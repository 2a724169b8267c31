//! SQL query builder for product searches.
//!
//! Builds SQL queries from parsed search filters, including:
//! - Text, category, price, and stock predicates (combined with AND)
//! - Sorting with a deterministic id tiebreaker
//! - LIMIT/OFFSET pagination
//!
//! The page query and the count query share one predicate-construction path
//! so both always see the identical WHERE clause and bind values.

use rust_decimal::Decimal;
use uuid::Uuid;

use super::params::{SearchFilters, SortKey};

/// Bind values for `sqlx` queries.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    Bool(bool),
    Decimal(Decimal),
    UuidArray(Vec<Uuid>),
}

fn push_text(bind_params: &mut Vec<BindValue>, value: String) -> usize {
    bind_params.push(BindValue::Text(value));
    bind_params.len()
}

fn push_bool(bind_params: &mut Vec<BindValue>, value: bool) -> usize {
    bind_params.push(BindValue::Bool(value));
    bind_params.len()
}

fn push_decimal(bind_params: &mut Vec<BindValue>, value: Decimal) -> usize {
    bind_params.push(BindValue::Decimal(value));
    bind_params.len()
}

fn push_uuid_array(bind_params: &mut Vec<BindValue>, value: Vec<Uuid>) -> usize {
    bind_params.push(BindValue::UuidArray(value));
    bind_params.len()
}

/// Base SELECT for product rows. Images and categories are attached through
/// correlated subqueries so a search stays at two statements per call (page
/// plus count) regardless of relation sizes.
pub(crate) const PRODUCT_SELECT: &str =
    "SELECT p.id, p.name, p.description, p.price, p.rating, p.in_stock, p.created_at, p.updated_at, \
     (SELECT COALESCE(jsonb_agg(jsonb_build_object('id', i.id, 'url', i.url) ORDER BY i.id), '[]'::jsonb) \
     FROM product_images i WHERE i.product_id = p.id) AS images, \
     (SELECT COALESCE(jsonb_agg(jsonb_build_object('id', c.id, 'name', c.name) ORDER BY c.name), '[]'::jsonb) \
     FROM product_categories pc JOIN categories c ON c.id = pc.category_id WHERE pc.product_id = p.id) AS categories \
     FROM products p";

/// Query builder for product searches.
#[derive(Debug)]
pub struct ProductQueryBuilder {
    filters: SearchFilters,
    limit: u32,
    offset: u64,
    case_insensitive: bool,
}

impl ProductQueryBuilder {
    pub fn new(filters: &SearchFilters) -> Self {
        Self {
            filters: filters.clone(),
            limit: 20,
            offset: 0,
            case_insensitive: false,
        }
    }

    /// Set the resolved skip/take window. Clamping happens upstream; the
    /// builder emits exactly what it is given.
    pub fn with_page(mut self, offset: u64, limit: u32) -> Self {
        self.offset = offset;
        self.limit = limit;
        self
    }

    /// Match the text query with ILIKE instead of LIKE.
    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    pub fn build_sql(&self) -> (String, Vec<BindValue>) {
        let mut sql = String::from(PRODUCT_SELECT);
        let mut bind_params = Vec::new();

        self.push_filters(&mut sql, &mut bind_params);
        self.push_order_by(&mut sql);

        sql.push_str(&format!(" LIMIT {} OFFSET {}", self.limit, self.offset));

        (sql, bind_params)
    }

    pub fn build_count_sql(&self) -> (String, Vec<BindValue>) {
        let mut sql = String::from("SELECT COUNT(*) FROM products p");
        let mut bind_params = Vec::new();

        self.push_filters(&mut sql, &mut bind_params);

        (sql, bind_params)
    }

    /// Append the WHERE clause for the active filters. Shared by the page
    /// and count queries.
    fn push_filters(&self, sql: &mut String, bind_params: &mut Vec<BindValue>) {
        let mut clauses = Vec::new();

        if let Some(q) = &self.filters.q {
            let operator = if self.case_insensitive { "ILIKE" } else { "LIKE" };
            let idx = push_text(bind_params, format!("%{}%", escape_like_pattern(q)));
            clauses.push(format!(
                "(p.name {op} ${i} ESCAPE E'\\\\' OR p.description {op} ${i} ESCAPE E'\\\\')",
                op = operator,
                i = idx
            ));
        }

        if !self.filters.categories.is_empty() {
            let idx = push_uuid_array(bind_params, self.filters.categories.clone());
            clauses.push(format!(
                "EXISTS (SELECT 1 FROM product_categories pc WHERE pc.product_id = p.id AND pc.category_id = ANY(${}))",
                idx
            ));
        }

        if let Some(min_price) = self.filters.min_price {
            let idx = push_decimal(bind_params, min_price);
            clauses.push(format!("p.price >= ${}", idx));
        }

        if let Some(max_price) = self.filters.max_price {
            let idx = push_decimal(bind_params, max_price);
            clauses.push(format!("p.price <= ${}", idx));
        }

        if let Some(in_stock) = self.filters.in_stock {
            let idx = push_bool(bind_params, in_stock);
            clauses.push(format!("p.in_stock = ${}", idx));
        }

        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
    }

    fn push_order_by(&self, sql: &mut String) {
        let (expr, dir) = match self.filters.sort {
            // Relevance has no scoring; it orders by recency and ignores the
            // requested direction.
            SortKey::Relevance => ("p.created_at", "DESC"),
            SortKey::Price => ("p.price", self.filters.direction.as_sql()),
            SortKey::CreatedAt => ("p.created_at", self.filters.direction.as_sql()),
            SortKey::Rating => ("p.rating", self.filters.direction.as_sql()),
        };

        // Ensure deterministic ordering for pagination.
        sql.push_str(&format!(" ORDER BY {expr} {dir}, p.id {dir}"));
    }
}

fn escape_like_pattern(s: &str) -> String {
    // Escape SQL LIKE meta-characters so user input is treated literally.
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' | '%' | '_' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}
