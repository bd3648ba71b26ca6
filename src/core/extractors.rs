//! Axum extractors with the API's own rejection semantics.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::core::ApiError;

/// JSON payload extractor that rejects with the API's 400 validation
/// error instead of axum's default 422.
///
/// A payload missing a required field (or carrying the wrong type for
/// one) never reaches the database; the request dies here.
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::Validation(rejection.body_text()))?;

        Ok(Payload(value))
    }
}
