//! Request handlers for the catalog endpoints
//!
//! Handlers parse and validate query input, call the matching service,
//! and shape the enveloped (or bare) JSON response.

pub mod categories;
pub mod metrics;
pub mod products;

pub use categories::*;
pub use metrics::*;
pub use products::*;
