// src/application/commands/products/create.rs
use super::ProductCommandService;
use crate::{
    application::{commands::retry::retry_on_slug_conflict, dto::ProductDto, error::ApplicationResult},
    domain::{
        category::CategoryId,
        product::{NewProduct, ProductName, ProductPrice},
    },
};

pub struct CreateProductCommand {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image: Option<String>,
    pub category_id: Option<i64>,
}

impl CreateProductCommand {
    pub fn builder() -> CreateProductCommandBuilder {
        CreateProductCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateProductCommandBuilder {
    name: Option<String>,
    description: Option<String>,
    price: Option<i64>,
    image: Option<String>,
    category_id: Option<i64>,
}

impl CreateProductCommandBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn category_id(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn build(self) -> Result<CreateProductCommand, &'static str> {
        Ok(CreateProductCommand {
            name: self.name.ok_or("name is required")?,
            description: self.description.unwrap_or_default(),
            price: self.price.ok_or("price is required")?,
            image: self.image,
            category_id: self.category_id,
        })
    }
}

impl ProductCommandService {
    pub async fn create_product(
        &self,
        command: CreateProductCommand,
    ) -> ApplicationResult<ProductDto> {
        let name = ProductName::new(command.name)?;
        let price = ProductPrice::new(command.price)?;
        let category_id = command.category_id.map(CategoryId::new).transpose()?;
        if let Some(category_id) = category_id {
            self.ensure_category_exists(category_id).await?;
        }

        let description = command.description;
        let image = command.image.unwrap_or_default();
        let now = self.clock.now();

        let created = retry_on_slug_conflict("product", {
            let (name, description, image) = (&name, &description, &image);
            move || async move {
                let slug = self
                    .slug_service
                    .generate_unique_slug(name, None, now)
                    .await?;
                self.write_repo
                    .insert(NewProduct {
                        name: name.clone(),
                        slug,
                        description: description.clone(),
                        price,
                        image: image.clone(),
                        category_id,
                        created_at: now,
                        updated_at: now,
                    })
                    .await
            }
        })
        .await?;

        tracing::info!(id = %created.id, slug = %created.slug, "product created");
        Ok(created.into())
    }
}
