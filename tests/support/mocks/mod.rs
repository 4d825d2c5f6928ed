// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod catalog;
pub mod time;

pub use catalog::InMemoryCatalog;
pub use time::{DummyClock, fixed_now};
