use chrono::{DateTime, Duration, Utc};
use mercato::models::{Category, CategoryRef, Product, ProductImage};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Builder for test products.
pub struct ProductBuilder {
    name: String,
    description: String,
    price: Decimal,
    rating: Decimal,
    in_stock: bool,
    created_at: DateTime<Utc>,
    images: Vec<ProductImage>,
    categories: Vec<CategoryRef>,
}

impl ProductBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: format!("{name} description"),
            price: Decimal::new(999, 2),
            rating: Decimal::new(400, 2),
            in_stock: true,
            created_at: Utc::now(),
            images: Vec::new(),
            categories: Vec::new(),
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn price(mut self, price: &str) -> Self {
        self.price = price.parse().expect("price literal");
        self
    }

    pub fn rating(mut self, rating: &str) -> Self {
        self.rating = rating.parse().expect("rating literal");
        self
    }

    pub fn in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    pub fn created_days_ago(mut self, days: i64) -> Self {
        self.created_at = Utc::now() - Duration::days(days);
        self
    }

    pub fn category(mut self, category: &Category) -> Self {
        self.categories.push(CategoryRef {
            id: category.id,
            name: category.name.clone(),
        });
        self
    }

    pub fn image(mut self, url: &str) -> Self {
        self.images.push(ProductImage {
            id: Uuid::new_v4(),
            url: url.to_string(),
        });
        self
    }

    pub fn build(self) -> Product {
        Product {
            id: Uuid::new_v4(),
            name: self.name,
            description: self.description,
            price: self.price,
            rating: self.rating,
            in_stock: self.in_stock,
            created_at: self.created_at,
            updated_at: self.created_at,
            images: self.images,
            categories: self.categories,
        }
    }
}

/// Creates a category with a fresh id.
pub fn category(name: &str) -> Category {
    let now = Utc::now();
    Category {
        id: Uuid::new_v4(),
        name: name.to_string(),
        created_at: now,
        updated_at: now,
    }
}
