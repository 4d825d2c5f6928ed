// src/domain/product/repository.rs
use crate::domain::category::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::product::entity::{NewProduct, Product, ProductUpdate};
use crate::domain::product::value_objects::ProductId;
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait ProductWriteRepository: Send + Sync {
    async fn insert(&self, product: NewProduct) -> DomainResult<Product>;
    async fn update(&self, update: ProductUpdate) -> DomainResult<Product>;
    async fn delete(&self, id: ProductId) -> DomainResult<()>;
}

#[async_trait]
pub trait ProductReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Product>>;
    async fn list(&self) -> DomainResult<Vec<Product>>;
    async fn list_by_category(&self, category_id: CategoryId) -> DomainResult<Vec<Product>>;
    async fn slug_exists(&self, slug: &str, exclude: Option<ProductId>) -> DomainResult<bool>;
}
