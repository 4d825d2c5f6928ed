// src/application/commands/products/update.rs
use super::ProductCommandService;
use chrono::{DateTime, Utc};

use crate::{
    application::{commands::retry::retry_on_slug_conflict, dto::ProductDto, error::ApplicationResult},
    domain::{
        category::CategoryId,
        errors::DomainResult,
        product::{Product, ProductId, ProductName, ProductPrice, ProductUpdate},
    },
};

pub struct UpdateProductCommand {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub image: Option<String>,
    pub category_id: Option<i64>,
}

impl ProductCommandService {
    pub async fn update_product(
        &self,
        command: UpdateProductCommand,
    ) -> ApplicationResult<ProductDto> {
        let id = ProductId::new(command.id)?;
        let product = self.load(id).await?;

        let UpdateProductCommand {
            id: _,
            name,
            description,
            price,
            image,
            category_id,
        } = command;
        let name = name.map(ProductName::new).transpose()?;
        let price = price.map(ProductPrice::new).transpose()?;
        let category_id = category_id.map(CategoryId::new).transpose()?;

        if let Some(category_id) = category_id.filter(|cid| product.moves_to(*cid)) {
            self.ensure_category_exists(category_id).await?;
        }

        let now = self.clock.now();
        let mut base = ProductUpdate::new(id, now);
        if let Some(description) = description {
            base = base.with_description(description);
        }
        if let Some(price) = price {
            base = base.with_price(price);
        }
        if let Some(image) = image {
            base = base.with_image(image);
        }
        if let Some(category_id) = category_id {
            base = base.with_category(category_id);
        }

        let updated = retry_on_slug_conflict("product", {
            let (product, name, base) = (&product, &name, &base);
            move || async move {
                let update = self.apply_rename(product, name.as_ref(), base.clone(), now).await?;
                self.write_repo.update(update).await
            }
        })
        .await?;

        tracing::info!(id = %updated.id, slug = %updated.slug, "product updated");
        Ok(updated.into())
    }

    async fn apply_rename(
        &self,
        product: &Product,
        name: Option<&ProductName>,
        mut update: ProductUpdate,
        now: DateTime<Utc>,
    ) -> DomainResult<ProductUpdate> {
        let Some(name) = name else {
            return Ok(update);
        };

        if product.needs_new_slug(name) {
            let slug = self
                .slug_service
                .generate_unique_slug(name, Some(product.id), now)
                .await?;
            update = update.with_slug(slug);
        }
        Ok(update.with_name(name.clone()))
    }
}
