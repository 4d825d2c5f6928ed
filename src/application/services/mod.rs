// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{categories::CategoryCommandService, products::ProductCommandService},
        ports::time::Clock,
        queries::{categories::CategoryQueryService, products::ProductQueryService},
    },
    domain::{
        category::{CategoryReadRepository, CategorySlugService, CategoryWriteRepository},
        product::{ProductReadRepository, ProductSlugService, ProductWriteRepository},
        slug::SlugGenerator,
    },
};

pub struct ApplicationServices {
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub product_commands: Arc<ProductCommandService>,
    pub product_queries: Arc<ProductQueryService>,
}

impl ApplicationServices {
    pub fn new(
        category_write_repo: Arc<dyn CategoryWriteRepository>,
        category_read_repo: Arc<dyn CategoryReadRepository>,
        product_write_repo: Arc<dyn ProductWriteRepository>,
        product_read_repo: Arc<dyn ProductReadRepository>,
        clock: Arc<dyn Clock>,
        slugger: Arc<SlugGenerator>,
    ) -> Self {
        let category_slugs = Arc::new(CategorySlugService::new(
            Arc::clone(&category_read_repo),
            Arc::clone(&slugger),
        ));
        let product_slugs = Arc::new(ProductSlugService::new(
            Arc::clone(&product_read_repo),
            Arc::clone(&slugger),
        ));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&category_write_repo),
            Arc::clone(&category_read_repo),
            category_slugs,
            Arc::clone(&clock),
        ));
        let product_commands = Arc::new(ProductCommandService::new(
            Arc::clone(&product_write_repo),
            Arc::clone(&product_read_repo),
            Arc::clone(&category_read_repo),
            product_slugs,
            Arc::clone(&clock),
        ));

        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&category_read_repo)));
        let product_queries = Arc::new(ProductQueryService::new(
            Arc::clone(&product_read_repo),
            Arc::clone(&category_read_repo),
        ));

        Self {
            category_commands,
            category_queries,
            product_commands,
            product_queries,
        }
    }
}
