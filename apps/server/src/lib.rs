//! Product catalog server - Rust implementation
//!
//! A read-only product search API with:
//! - Filtered catalog search (text, categories, price range, stock)
//! - Deterministic sorting and clamped pagination
//! - Single product reads and category listing
//! - Prometheus metrics and structured request logging

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
