// src/application/commands/products/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        category::{CategoryId, CategoryReadRepository},
        product::{
            Product, ProductId, ProductReadRepository, ProductSlugService, ProductWriteRepository,
        },
    },
};

pub struct ProductCommandService {
    pub(super) write_repo: Arc<dyn ProductWriteRepository>,
    pub(super) read_repo: Arc<dyn ProductReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryReadRepository>,
    pub(super) slug_service: Arc<ProductSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ProductCommandService {
    pub fn new(
        write_repo: Arc<dyn ProductWriteRepository>,
        read_repo: Arc<dyn ProductReadRepository>,
        category_repo: Arc<dyn CategoryReadRepository>,
        slug_service: Arc<ProductSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            slug_service,
            clock,
        }
    }

    pub(super) async fn load(&self, id: ProductId) -> ApplicationResult<Product> {
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("product not found"))
    }

    pub(super) async fn ensure_category_exists(&self, id: CategoryId) -> ApplicationResult<()> {
        match self.category_repo.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(ApplicationError::not_found("category not found")),
        }
    }
}
