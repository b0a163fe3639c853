//! JSON body extractor with the API error envelope
//!
//! Axum's stock `Json` rejection writes a plain-text body; wrapping it
//! keeps malformed-body responses inside `{"error": ...}`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;

pub struct Body<T>(pub T);

impl<S, T> FromRequest<S> for Body<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::Decode(rejection.body_text()))?;

        Ok(Self(value))
    }
}
