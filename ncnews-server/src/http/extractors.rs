//! Custom Axum extractors
//!
//! Both convert axum's own rejections into `ApiError::Validation`, so a bad
//! id or body gets the same `{msg}` 400 as every other validation failure.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::ValidationError;

/// Extract and validate a numeric id from a single-parameter path
pub struct ValidId(pub i32);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid_id())?;

        let id = raw.parse::<i32>().map_err(|_| invalid_id())?;

        Ok(Self(id))
    }
}

fn invalid_id() -> ApiError {
    ApiError::Validation(ValidationError::InvalidFormat {
        field: "id",
        reason: "must be an integer",
    })
}

/// JSON body extractor whose rejection is a 400 `ApiError`
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            ApiError::Validation(ValidationError::Malformed {
                reason: rejection.body_text(),
            })
        })?;

        Ok(Self(value))
    }
}
