// src/domain/slug/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlugError<E> {
    /// The existence check itself failed; carried through untouched.
    #[error(transparent)]
    Check(E),

    #[error("no free slug derived from '{base}' after {attempts} attempts")]
    Exhausted { base: String, attempts: u32 },
}

impl From<SlugError<DomainError>> for DomainError {
    fn from(err: SlugError<DomainError>) -> Self {
        match err {
            SlugError::Check(inner) => inner,
            exhausted @ SlugError::Exhausted { .. } => Self::SlugExhausted(exhausted.to_string()),
        }
    }
}
