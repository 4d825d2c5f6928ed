// src/application/commands/retry.rs
use std::future::Future;

use crate::domain::errors::DomainResult;

const SLUG_WRITE_ATTEMPTS: u32 = 2;

/// Runs a generate-slug-then-write step, repeating it once when the store
/// rejects the write with a uniqueness conflict. The existence check and the
/// write are not atomic, so a concurrent writer may claim the same slug in
/// between; the unique constraint on the slug column catches that.
pub(super) async fn retry_on_slug_conflict<T, F, Fut>(entity: &str, mut write: F) -> DomainResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    let mut attempt = 1;
    loop {
        match write().await {
            Err(err) if err.is_conflict() && attempt < SLUG_WRITE_ATTEMPTS => {
                tracing::warn!(entity, attempt, error = %err, "slug claimed concurrently, regenerating");
                attempt += 1;
            }
            result => return result,
        }
    }
}
