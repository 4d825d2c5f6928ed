// src/domain/slug/mod.rs
mod checker;
mod error;
mod generator;
mod value;

pub use checker::ExistenceChecker;
pub use error::SlugError;
pub use generator::{
    DEFAULT_BOUNDARY_WINDOW, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_LENGTH, SlugGenerator, SlugOptions,
};
pub use value::{Slug, is_well_formed};
