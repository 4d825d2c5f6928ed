// src/application/commands/categories/update.rs
use super::CategoryCommandService;
use crate::{
    application::{commands::retry::retry_on_slug_conflict, dto::CategoryDto, error::ApplicationResult},
    domain::category::{CategoryId, CategoryName, CategoryUpdate},
};

pub struct UpdateCategoryCommand {
    pub id: i64,
    pub name: Option<String>,
    pub image: Option<String>,
}

impl CategoryCommandService {
    pub async fn update_category(
        &self,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::new(command.id)?;
        let category = self.load(id).await?;

        let UpdateCategoryCommand { id: _, name, image } = command;
        let name = name.map(CategoryName::new).transpose()?;
        let now = self.clock.now();

        let updated = retry_on_slug_conflict("category", {
            let (category, name, image) = (&category, &name, &image);
            move || async move {
                let mut update = CategoryUpdate::new(id, now);
                if let Some(name) = name {
                    // The stored slug stays put unless the name really changes;
                    // the record itself is excluded from the collision check.
                    if category.needs_new_slug(name) {
                        let slug = self
                            .slug_service
                            .generate_unique_slug(name, Some(id), now)
                            .await?;
                        update = update.with_slug(slug);
                    }
                    update = update.with_name(name.clone());
                }
                if let Some(image) = image {
                    update = update.with_image(image.clone());
                }
                self.write_repo.update(update).await
            }
        })
        .await?;

        tracing::info!(id = %updated.id, slug = %updated.slug, "category updated");
        Ok(updated.into())
    }
}
