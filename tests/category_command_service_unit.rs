// tests/category_command_service_unit.rs
use std::sync::Arc;

use catalog_core::application::commands::categories::{
    CreateCategoryCommand, DeleteCategoryCommand, UpdateCategoryCommand,
};
use catalog_core::application::error::ApplicationError;
use catalog_core::application::queries::categories::GetCategoryBySlugQuery;
use catalog_core::domain::errors::DomainError;
use catalog_core::domain::slug::SlugOptions;

mod support;

use support::{CategoryBuilder, InMemoryCatalog};

fn create(name: &str) -> CreateCategoryCommand {
    CreateCategoryCommand {
        name: name.into(),
        image: None,
    }
}

#[tokio::test]
async fn sequential_creates_walk_the_suffix_sequence() {
    let catalog = Arc::new(InMemoryCatalog::new());
    let services = support::build_services(catalog, SlugOptions::default());

    let mut slugs = Vec::new();
    for _ in 0..4 {
        let dto = services.category_commands.create_category(create("Hello World")).await.unwrap();
        slugs.push(dto.slug);
    }
    assert_eq!(slugs, ["hello-world", "hello-world-1", "hello-world-2", "hello-world-3"]);
}

#[tokio::test]
async fn created_category_uses_clock_time() {
    let catalog = Arc::new(InMemoryCatalog::new());
    let services = support::build_services(catalog, SlugOptions::default());

    let dto = services.category_commands.create_category(create("Hats")).await.unwrap();
    assert_eq!(dto.created_at, support::fixed_now());
    assert_eq!(dto.updated_at, support::fixed_now());
}

#[tokio::test]
async fn unsluggable_name_falls_back_to_timestamp() {
    let catalog = Arc::new(InMemoryCatalog::new());
    let services = support::build_services(catalog, SlugOptions::default());

    let dto = services.category_commands.create_category(create("!!!")).await.unwrap();
    assert_eq!(dto.name, "!!!");
    assert_eq!(dto.slug, "category-1704067200");
}

#[tokio::test]
async fn concurrent_slug_claim_is_retried_once() {
    let catalog = Arc::new(InMemoryCatalog::new());
    catalog.inject_slug_conflicts(1);
    let services = support::build_services(catalog.clone(), SlugOptions::default());

    let dto = services.category_commands.create_category(create("Shoes")).await.unwrap();
    assert_eq!(dto.slug, "shoes");
    assert_eq!(catalog.category_count(), 1);
    assert_eq!(catalog.slug_checks(), 2);
}

#[tokio::test]
async fn repeated_concurrent_claims_surface_as_conflict() {
    let catalog = Arc::new(InMemoryCatalog::new());
    catalog.inject_slug_conflicts(2);
    let services = support::build_services(catalog.clone(), SlugOptions::default());

    let err = services.category_commands.create_category(create("Shoes")).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(DomainError::Conflict(_))));
    assert_eq!(catalog.category_count(), 0);
}

#[tokio::test]
async fn rename_ignores_own_slug() {
    let catalog = Arc::new(InMemoryCatalog::new());
    catalog.seed_category(CategoryBuilder::new().id(1).name("Shoes").slug("shoes").build());
    let services = support::build_services(catalog, SlugOptions::default());

    // Same slug after transliteration, different name.
    let dto = services
        .category_commands
        .update_category(UpdateCategoryCommand {
            id: 1,
            name: Some("SHOES".into()),
            image: None,
        })
        .await
        .unwrap();
    assert_eq!(dto.name, "SHOES");
    assert_eq!(dto.slug, "shoes");
}

#[tokio::test]
async fn rename_onto_another_slug_gets_suffix() {
    let catalog = Arc::new(InMemoryCatalog::new());
    catalog.seed_category(CategoryBuilder::new().id(1).name("Shoes").slug("shoes").build());
    catalog.seed_category(CategoryBuilder::new().id(2).name("Boots").slug("boots").build());
    let services = support::build_services(catalog, SlugOptions::default());

    let dto = services
        .category_commands
        .update_category(UpdateCategoryCommand {
            id: 2,
            name: Some("Shoes".into()),
            image: None,
        })
        .await
        .unwrap();
    assert_eq!(dto.slug, "shoes-1");

    let found = services
        .category_queries
        .get_category_by_slug(GetCategoryBySlugQuery {
            slug: "shoes-1".into(),
        })
        .await
        .unwrap();
    assert_eq!(found.id, 2);
}

#[tokio::test]
async fn image_only_update_skips_slug_generation() {
    let catalog = Arc::new(InMemoryCatalog::new());
    catalog.seed_category(CategoryBuilder::new().id(1).build());
    let services = support::build_services(catalog.clone(), SlugOptions::default());

    let dto = services
        .category_commands
        .update_category(UpdateCategoryCommand {
            id: 1,
            name: None,
            image: Some("shoes.png".into()),
        })
        .await
        .unwrap();
    assert_eq!(dto.image, "shoes.png");
    assert_eq!(dto.slug, "shoes");
    assert_eq!(catalog.slug_checks(), 0);
}

#[tokio::test]
async fn delete_missing_category_is_not_found() {
    let catalog = Arc::new(InMemoryCatalog::new());
    let services = support::build_services(catalog, SlugOptions::default());

    let err = services
        .category_commands
        .delete_category(DeleteCategoryCommand { id: 9 })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}
