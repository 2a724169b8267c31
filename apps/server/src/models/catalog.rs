//! Domain models for products and categories

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A product in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product ID
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Free-text description
    pub description: String,

    /// Unit price. Serialized as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Average review rating, 0 to 5. Serialized as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub rating: Decimal,

    /// Whether the product is currently in stock
    pub in_stock: bool,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,

    /// Images attached to the product
    pub images: Vec<ProductImage>,

    /// Categories the product belongs to, flattened to id/name pairs
    pub categories: Vec<CategoryRef>,
}

/// An image attached to a product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductImage {
    pub id: Uuid,
    pub url: String,
}

/// A category as embedded in a product record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: Uuid,
    pub name: String,
}

/// A category in the catalog vocabulary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,

    /// Unique display name
    pub name: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
