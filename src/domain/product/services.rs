// src/domain/product/services.rs
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::product::repository::ProductReadRepository;
use crate::domain::product::value_objects::{ProductId, ProductName};
use crate::domain::slug::{ExistenceChecker, Slug, SlugGenerator};

pub struct ProductSlugScope<'a> {
    repo: &'a dyn ProductReadRepository,
    exclude: Option<ProductId>,
}

impl<'a> ProductSlugScope<'a> {
    pub fn new(repo: &'a dyn ProductReadRepository, exclude: Option<ProductId>) -> Self {
        Self { repo, exclude }
    }
}

#[async_trait]
impl<'a> ExistenceChecker for ProductSlugScope<'a> {
    type Error = DomainError;

    async fn exists(&self, candidate: &str) -> Result<bool, Self::Error> {
        self.repo.slug_exists(candidate, self.exclude).await
    }
}

pub struct ProductSlugService {
    read_repo: Arc<dyn ProductReadRepository>,
    generator: Arc<SlugGenerator>,
}

impl ProductSlugService {
    pub fn new(read_repo: Arc<dyn ProductReadRepository>, generator: Arc<SlugGenerator>) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    pub async fn generate_unique_slug(
        &self,
        name: &ProductName,
        ignore_id: Option<ProductId>,
        now: DateTime<Utc>,
    ) -> DomainResult<Slug> {
        let scope = ProductSlugScope::new(self.read_repo.as_ref(), ignore_id);
        let source = self
            .generator
            .source_or_fallback(name.as_str(), "product", now);
        let slug = self.generator.generate_unique(&source, &scope).await?;
        Slug::new(slug)
    }
}
