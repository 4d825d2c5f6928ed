// tests/support/mocks/catalog.rs
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, AtomicU32, Ordering};

use async_trait::async_trait;
use catalog_core::domain::category::{
    Category, CategoryId, CategoryReadRepository, CategoryUpdate, CategoryWriteRepository,
    NewCategory,
};
use catalog_core::domain::errors::{DomainError, DomainResult};
use catalog_core::domain::product::{
    NewProduct, Product, ProductId, ProductReadRepository, ProductUpdate, ProductWriteRepository,
};
use catalog_core::domain::slug::Slug;

/// In-memory stand-in for the Postgres store. Slugs are unique per table,
/// deleting a category un-assigns its products, and referencing a missing
/// category fails the way the foreign key does.
#[derive(Default)]
pub struct InMemoryCatalog {
    categories: Mutex<BTreeMap<i64, Category>>,
    products: Mutex<BTreeMap<i64, Product>>,
    next_id: AtomicI64,
    injected_conflicts: AtomicU32,
    slug_checks: AtomicU32,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The next `count` writes fail with a slug conflict, as if a concurrent
    /// writer claimed the slug between the existence check and the write.
    pub fn inject_slug_conflicts(&self, count: u32) {
        self.injected_conflicts.store(count, Ordering::SeqCst);
    }

    fn require_category(&self, category_id: Option<CategoryId>) -> DomainResult<()> {
        let known = self.categories.lock().unwrap();
        match category_id {
            Some(id) if !known.contains_key(&i64::from(id)) => {
                Err(DomainError::NotFound("category not found".into()))
            }
            _ => Ok(()),
        }
    }

    pub fn slug_checks(&self) -> u32 {
        self.slug_checks.load(Ordering::SeqCst)
    }

    pub fn category_count(&self) -> usize {
        self.categories.lock().unwrap().len()
    }

    pub fn product_count(&self) -> usize {
        self.products.lock().unwrap().len()
    }

    pub fn seed_category(&self, category: Category) {
        self.bump_id_past(i64::from(category.id));
        self.categories
            .lock()
            .unwrap()
            .insert(i64::from(category.id), category);
    }

    pub fn seed_product(&self, product: Product) {
        self.bump_id_past(i64::from(product.id));
        self.products
            .lock()
            .unwrap()
            .insert(i64::from(product.id), product);
    }

    fn bump_id_past(&self, id: i64) {
        self.next_id.fetch_max(id, Ordering::SeqCst);
    }

    fn allocate_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn take_injected_conflict(&self) -> DomainResult<()> {
        let taken = self
            .injected_conflicts
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if taken {
            Err(DomainError::Conflict("slug already exists".into()))
        } else {
            Ok(())
        }
    }
}

fn slug_taken<'a>(
    rows: impl IntoIterator<Item = (&'a i64, &'a Slug)>,
    slug: &str,
    exclude: Option<i64>,
) -> bool {
    rows.into_iter()
        .any(|(id, existing)| existing.as_str() == slug && Some(*id) != exclude)
}

#[async_trait]
impl CategoryWriteRepository for InMemoryCatalog {
    async fn insert(&self, new: NewCategory) -> DomainResult<Category> {
        self.take_injected_conflict()?;
        let mut rows = self.categories.lock().unwrap();
        if slug_taken(rows.iter().map(|(id, c)| (id, &c.slug)), new.slug.as_str(), None) {
            return Err(DomainError::Conflict("category slug already exists".into()));
        }
        let id = self.allocate_id();
        let category = Category {
            id: CategoryId::new(id)?,
            name: new.name,
            slug: new.slug,
            image: new.image,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        rows.insert(id, category.clone());
        Ok(category)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        self.take_injected_conflict()?;
        let mut rows = self.categories.lock().unwrap();
        let id = i64::from(update.id);
        let slug_clash = update.slug.as_ref().is_some_and(|slug| {
            slug_taken(rows.iter().map(|(id, c)| (id, &c.slug)), slug.as_str(), Some(id))
        });
        if slug_clash {
            return Err(DomainError::Conflict("category slug already exists".into()));
        }
        let category = rows
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        if let Some(name) = update.name {
            category.name = name;
        }
        if let Some(slug) = update.slug {
            category.slug = slug;
        }
        if let Some(image) = update.image {
            category.image = image;
        }
        category.updated_at = update.updated_at;
        Ok(category.clone())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let removed = self.categories.lock().unwrap().remove(&i64::from(id));
        if removed.is_none() {
            return Err(DomainError::NotFound("category not found".into()));
        }
        for product in self.products.lock().unwrap().values_mut() {
            if product.category_id == Some(id) {
                product.category_id = None;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryReadRepository for InMemoryCatalog {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.categories.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        let rows = self.categories.lock().unwrap();
        Ok(rows.values().find(|c| &c.slug == slug).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let mut all: Vec<Category> = self.categories.lock().unwrap().values().cloned().collect();
        all.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(all)
    }

    async fn slug_exists(&self, slug: &str, exclude: Option<CategoryId>) -> DomainResult<bool> {
        self.slug_checks.fetch_add(1, Ordering::SeqCst);
        let rows = self.categories.lock().unwrap();
        Ok(slug_taken(rows.iter().map(|(id, c)| (id, &c.slug)), slug, exclude.map(i64::from)))
    }
}

#[async_trait]
impl ProductWriteRepository for InMemoryCatalog {
    async fn insert(&self, new: NewProduct) -> DomainResult<Product> {
        self.take_injected_conflict()?;
        self.require_category(new.category_id)?;
        let mut rows = self.products.lock().unwrap();
        if slug_taken(rows.iter().map(|(id, p)| (id, &p.slug)), new.slug.as_str(), None) {
            return Err(DomainError::Conflict("product slug already exists".into()));
        }
        let id = self.allocate_id();
        let product = Product {
            id: ProductId::new(id)?,
            name: new.name,
            slug: new.slug,
            description: new.description,
            price: new.price,
            image: new.image,
            category_id: new.category_id,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        rows.insert(id, product.clone());
        Ok(product)
    }

    async fn update(&self, update: ProductUpdate) -> DomainResult<Product> {
        self.take_injected_conflict()?;
        self.require_category(update.category_id)?;
        let mut rows = self.products.lock().unwrap();
        let id = i64::from(update.id);
        let slug_clash = update.slug.as_ref().is_some_and(|slug| {
            slug_taken(rows.iter().map(|(id, p)| (id, &p.slug)), slug.as_str(), Some(id))
        });
        if slug_clash {
            return Err(DomainError::Conflict("product slug already exists".into()));
        }
        let product = rows
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("product not found".into()))?;
        if let Some(name) = update.name {
            product.name = name;
        }
        if let Some(slug) = update.slug {
            product.slug = slug;
        }
        if let Some(description) = update.description {
            product.description = description;
        }
        if let Some(price) = update.price {
            product.price = price;
        }
        if let Some(image) = update.image {
            product.image = image;
        }
        if let Some(category_id) = update.category_id {
            product.category_id = Some(category_id);
        }
        product.updated_at = update.updated_at;
        Ok(product.clone())
    }

    async fn delete(&self, id: ProductId) -> DomainResult<()> {
        match self.products.lock().unwrap().remove(&i64::from(id)) {
            Some(_) => Ok(()),
            None => Err(DomainError::NotFound("product not found".into())),
        }
    }
}

#[async_trait]
impl ProductReadRepository for InMemoryCatalog {
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        Ok(self.products.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Product>> {
        let rows = self.products.lock().unwrap();
        Ok(rows.values().find(|p| &p.slug == slug).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Product>> {
        let mut all: Vec<Product> = self.products.lock().unwrap().values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(i64::from(b.id).cmp(&i64::from(a.id))));
        Ok(all)
    }

    async fn list_by_category(&self, category_id: CategoryId) -> DomainResult<Vec<Product>> {
        let mut all: Vec<Product> = self
            .products
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.category_id == Some(category_id))
            .cloned()
            .collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(i64::from(b.id).cmp(&i64::from(a.id))));
        Ok(all)
    }

    async fn slug_exists(&self, slug: &str, exclude: Option<ProductId>) -> DomainResult<bool> {
        self.slug_checks.fetch_add(1, Ordering::SeqCst);
        let rows = self.products.lock().unwrap();
        Ok(slug_taken(rows.iter().map(|(id, p)| (id, &p.slug)), slug, exclude.map(i64::from)))
    }
}
