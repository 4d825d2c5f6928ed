use crate::domain::product::Product;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
    /// Price in minor currency units.
    pub price: i64,
    pub image: String,
    #[serde(default)]
    pub category_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.into(),
            name: product.name.into_inner(),
            slug: product.slug.into_inner(),
            description: product.description,
            price: product.price.into(),
            image: product.image,
            category_id: product.category_id.map(Into::into),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
