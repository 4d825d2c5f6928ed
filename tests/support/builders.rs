// tests/support/builders.rs
use catalog_core::domain::category::{Category, CategoryId, CategoryName};
use catalog_core::domain::product::{Product, ProductId, ProductName, ProductPrice};
use catalog_core::domain::slug::Slug;

use super::mocks::fixed_now;

pub struct CategoryBuilder {
    id: i64,
    name: String,
    slug: String,
}

impl Default for CategoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            name: "Shoes".into(),
            slug: "shoes".into(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn build(self) -> Category {
        Category {
            id: CategoryId::new(self.id).unwrap(),
            name: CategoryName::new(self.name).unwrap(),
            slug: Slug::new(self.slug).unwrap(),
            image: String::new(),
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}

pub struct ProductBuilder {
    id: i64,
    name: String,
    slug: String,
    price: i64,
    category_id: Option<i64>,
}

impl Default for ProductBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            name: "Kettle".into(),
            slug: "kettle".into(),
            price: 1999,
            category_id: None,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn build(self) -> Product {
        Product {
            id: ProductId::new(self.id).unwrap(),
            name: ProductName::new(self.name).unwrap(),
            slug: Slug::new(self.slug).unwrap(),
            description: String::new(),
            price: ProductPrice::new(self.price).unwrap(),
            image: String::new(),
            category_id: self.category_id.map(|id| CategoryId::new(id).unwrap()),
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}
