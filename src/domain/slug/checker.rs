// src/domain/slug/checker.rs
use async_trait::async_trait;
use std::collections::HashSet;
use std::convert::Infallible;

/// Answers whether a candidate slug is already taken inside one namespace.
///
/// Implementations carry their own scoping (which table, which record to
/// ignore during an update) and are consulted one candidate at a time.
#[async_trait]
pub trait ExistenceChecker: Send + Sync {
    type Error: Send;

    async fn exists(&self, candidate: &str) -> Result<bool, Self::Error>;
}

#[async_trait]
impl ExistenceChecker for HashSet<String> {
    type Error = Infallible;

    async fn exists(&self, candidate: &str) -> Result<bool, Self::Error> {
        Ok(self.contains(candidate))
    }
}
