// src/application/commands/categories/create.rs
use super::CategoryCommandService;
use crate::{
    application::{commands::retry::retry_on_slug_conflict, dto::CategoryDto, error::ApplicationResult},
    domain::category::{CategoryName, NewCategory},
};

pub struct CreateCategoryCommand {
    pub name: String,
    pub image: Option<String>,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let name = CategoryName::new(command.name)?;
        let image = command.image.unwrap_or_default();
        let now = self.clock.now();

        let created = retry_on_slug_conflict("category", {
            let (name, image) = (&name, &image);
            move || async move {
                let slug = self
                    .slug_service
                    .generate_unique_slug(name, None, now)
                    .await?;
                self.write_repo
                    .insert(NewCategory {
                        name: name.clone(),
                        slug,
                        image: image.clone(),
                        created_at: now,
                        updated_at: now,
                    })
                    .await
            }
        })
        .await?;

        tracing::info!(id = %created.id, slug = %created.slug, "category created");
        Ok(created.into())
    }
}
