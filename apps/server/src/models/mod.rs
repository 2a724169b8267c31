//! Domain models for the catalog server

pub mod catalog;
pub mod page;

pub use catalog::{Category, CategoryRef, Product, ProductImage};
pub use page::{PageMeta, Paginated};
