//! Database layer - storage backends and query building

pub mod memory;
pub mod search;
pub mod store;
pub mod traits;

pub use memory::MemoryCatalogStore;
pub use search::{ProductQueryBuilder, SearchFilters, SortDirection, SortKey};
pub use store::{create_pool, run_migrations, PostgresCatalogStore};
pub use traits::{CategoryStore, ProductStore};
