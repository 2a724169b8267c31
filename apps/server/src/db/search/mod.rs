//! Product search: filter parsing and SQL construction.

pub mod params;
pub mod query_builder;

pub use params::{SearchFilters, SortDirection, SortKey};
pub use query_builder::{BindValue, ProductQueryBuilder};
