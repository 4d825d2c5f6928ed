// src/domain/product/entity.rs
use crate::domain::category::CategoryId;
use crate::domain::product::value_objects::{ProductId, ProductName, ProductPrice};
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub slug: Slug,
    pub description: String,
    pub price: ProductPrice,
    pub image: String,
    pub category_id: Option<CategoryId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn needs_new_slug(&self, name: &ProductName) -> bool {
        &self.name != name
    }

    pub fn moves_to(&self, category_id: CategoryId) -> bool {
        self.category_id != Some(category_id)
    }
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: ProductName,
    pub slug: Slug,
    pub description: String,
    pub price: ProductPrice,
    pub image: String,
    pub category_id: Option<CategoryId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ProductUpdate {
    pub id: ProductId,
    pub name: Option<ProductName>,
    pub slug: Option<Slug>,
    pub description: Option<String>,
    pub price: Option<ProductPrice>,
    pub image: Option<String>,
    pub category_id: Option<CategoryId>,
    pub updated_at: DateTime<Utc>,
}

impl ProductUpdate {
    pub fn new(id: ProductId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: None,
            slug: None,
            description: None,
            price: None,
            image: None,
            category_id: None,
            updated_at,
        }
    }

    pub fn with_name(mut self, name: ProductName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_price(mut self, price: ProductPrice) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_image(mut self, image: String) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }
}
