//! Custom Axum extractors

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON body extractor. Every rejection (415 and 422 included) becomes a
/// 400 `{"ERROR": ...}` carrying the parse message.
pub struct BookJson<T>(pub T);

impl<T, S> FromRequest<S> for BookJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

        Ok(Self(value))
    }
}
