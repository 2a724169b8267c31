//! Service layer - orchestration between HTTP handlers and storage

pub mod categories;
pub mod products;

pub use categories::CategoryService;
pub use products::ProductService;
