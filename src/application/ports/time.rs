// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of creation/update timestamps for catalog records.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
