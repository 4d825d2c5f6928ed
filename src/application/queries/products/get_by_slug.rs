use super::ProductQueryService;
use crate::{
    application::{
        dto::ProductDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::slug::Slug,
};

pub struct GetProductBySlugQuery {
    pub slug: String,
}

impl ProductQueryService {
    pub async fn get_product_by_slug(
        &self,
        query: GetProductBySlugQuery,
    ) -> ApplicationResult<ProductDto> {
        let slug = Slug::new(query.slug)?;
        let product = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("product not found"))?;
        Ok(product.into())
    }
}
