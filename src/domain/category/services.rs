// src/domain/category/services.rs
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::category::repository::CategoryReadRepository;
use crate::domain::category::value_objects::{CategoryId, CategoryName};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{ExistenceChecker, Slug, SlugGenerator};

/// The category slug namespace, optionally ignoring the record being renamed.
pub struct CategorySlugScope<'a> {
    repo: &'a dyn CategoryReadRepository,
    exclude: Option<CategoryId>,
}

impl<'a> CategorySlugScope<'a> {
    pub fn new(repo: &'a dyn CategoryReadRepository, exclude: Option<CategoryId>) -> Self {
        Self { repo, exclude }
    }
}

#[async_trait]
impl<'a> ExistenceChecker for CategorySlugScope<'a> {
    type Error = DomainError;

    async fn exists(&self, candidate: &str) -> Result<bool, Self::Error> {
        self.repo.slug_exists(candidate, self.exclude).await
    }
}

/// Domain service responsible for producing unique slugs for categories.
pub struct CategorySlugService {
    read_repo: Arc<dyn CategoryReadRepository>,
    generator: Arc<SlugGenerator>,
}

impl CategorySlugService {
    pub fn new(read_repo: Arc<dyn CategoryReadRepository>, generator: Arc<SlugGenerator>) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    pub async fn generate_unique_slug(
        &self,
        name: &CategoryName,
        ignore_id: Option<CategoryId>,
        now: DateTime<Utc>,
    ) -> DomainResult<Slug> {
        let scope = CategorySlugScope::new(self.read_repo.as_ref(), ignore_id);
        let source = self
            .generator
            .source_or_fallback(name.as_str(), "category", now);
        let slug = self.generator.generate_unique(&source, &scope).await?;
        Slug::new(slug)
    }
}
