//! Request extractors that reject with envelope-shaped errors.

use axum::{
    extract::{FromRequest, FromRequestParts, Json, Path, Request},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use uuid::Uuid;
use validator::Validate;

use crate::errors::AppError;

/// Extractor for UUID path parameters.
///
/// Parses the sole path parameter as a UUID, rejecting with a 400 envelope
/// when it is malformed.
///
/// # Example
/// ```ignore
/// async fn get_task(UuidPath(id): UuidPath) -> String {
///     format!("Task ID: {}", id)
/// }
/// ```
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match Uuid::parse_str(&id) {
            Ok(uuid) => Ok(UuidPath(uuid)),
            Err(_) => Err(AppError::BadRequest(format!("Invalid UUID: {}", id)).into_response()),
        }
    }
}

/// JSON body extractor with automatic validation.
///
/// Deserializes the request body and runs the `validator` crate's
/// [`Validate`] checks, rejecting with a 400 envelope on either failure.
/// Malformed JSON and out-of-range enum values are therefore refused before
/// a handler ever runs.
///
/// # Example
/// ```ignore
/// async fn create_task(ApiJson(input): ApiJson<CreateTask>) { /* ... */ }
/// ```
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()).into_response())?;

        data.validate()
            .map_err(|e| AppError::BadRequest(e.to_string()).into_response())?;

        Ok(ApiJson(data))
    }
}
