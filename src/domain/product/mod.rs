// src/domain/product/mod.rs
pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewProduct, Product, ProductUpdate};
pub use repository::{ProductReadRepository, ProductWriteRepository};
pub use services::{ProductSlugScope, ProductSlugService};
pub use value_objects::{ProductId, ProductName, ProductPrice};
