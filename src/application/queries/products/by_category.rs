use super::ProductQueryService;
use crate::{
    application::{
        dto::ProductDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::slug::Slug,
};

pub struct ListProductsByCategoryQuery {
    pub category_slug: String,
}

impl ProductQueryService {
    pub async fn list_products_by_category(
        &self,
        query: ListProductsByCategoryQuery,
    ) -> ApplicationResult<Vec<ProductDto>> {
        let slug = Slug::new(query.category_slug)?;
        let category = self
            .category_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let products = self.read_repo.list_by_category(category.id).await?;
        Ok(products.into_iter().map(Into::into).collect())
    }
}
