// src/domain/category/mod.rs
pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Category, CategoryUpdate, NewCategory};
pub use repository::{CategoryReadRepository, CategoryWriteRepository};
pub use services::{CategorySlugScope, CategorySlugService};
pub use value_objects::{CategoryId, CategoryName};
