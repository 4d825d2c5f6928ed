use super::ProductQueryService;
use crate::application::{dto::ProductDto, error::ApplicationResult};

impl ProductQueryService {
    pub async fn list_products(&self) -> ApplicationResult<Vec<ProductDto>> {
        let products = self.read_repo.list().await?;
        Ok(products.into_iter().map(Into::into).collect())
    }
}
