// src/presentation/http/extractors.rs
use crate::application::error::ApplicationError;
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use super::error::HttpError;

/// JSON body whose rejections render as the usual error envelope instead of
/// axum's plain-text response.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(HttpError::from_error(ApplicationError::validation(
                rejection.body_text(),
            ))),
        }
    }
}
