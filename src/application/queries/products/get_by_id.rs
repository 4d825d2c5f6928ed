use super::ProductQueryService;
use crate::{
    application::{
        dto::ProductDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::product::ProductId,
};

pub struct GetProductByIdQuery {
    pub id: i64,
}

impl ProductQueryService {
    pub async fn get_product_by_id(
        &self,
        query: GetProductByIdQuery,
    ) -> ApplicationResult<ProductDto> {
        let id = ProductId::new(query.id)?;
        let product = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("product not found"))?;
        Ok(product.into())
    }
}
