// src/application/commands/mod.rs
pub mod categories;
pub mod products;
mod retry;
