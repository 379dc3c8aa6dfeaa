//! Uniform response envelope and application error type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Uniform response envelope returned by every endpoint.
///
/// Exactly one of `data`/`error` is populated; `status` mirrors the HTTP
/// status code so clients reading the body alone see the outcome.
///
/// # JSON Examples
///
/// ```json
/// {"status": 201, "data": {"id": "...", "name": "deploy"}}
/// {"status": 404, "error": "Task not found"}
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// HTTP status code of the response
    pub status: u16,
    /// Operation result, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message, present on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(status: StatusCode, data: T) -> Self {
        Self {
            status: status.as_u16(),
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            data: None,
            error: Some(message.into()),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let code = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (code, Json(self)).into_response()
    }
}

/// Application error type that renders as an envelope response.
///
/// Domain errors convert into this at the handler boundary; internal
/// failures are logged server-side and reported to the client generically.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => {
                tracing::debug!("bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::NotFound(msg) => {
                tracing::debug!("not found: {}", msg);
                (StatusCode::NOT_FOUND, msg)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        ApiResponse::failure(status, message).into_response()
    }
}

/// Fallback handler for unmatched routes.
pub async fn not_found() -> Response {
    ApiResponse::failure(
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_has_data_only() {
        let resp = ApiResponse::success(StatusCode::CREATED, "payload");
        assert_eq!(resp.status, 201);
        assert_eq!(resp.data, Some("payload"));
        assert!(resp.error.is_none());
    }

    #[test]
    fn test_failure_envelope_has_error_only() {
        let resp = ApiResponse::failure(StatusCode::NOT_FOUND, "missing");
        assert_eq!(resp.status, 404);
        assert!(resp.data.is_none());
        assert_eq!(resp.error.as_deref(), Some("missing"));
    }

    #[test]
    fn test_envelope_serialization_skips_empty_side() {
        let resp = ApiResponse::success(StatusCode::OK, 42);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json, serde_json::json!({"status": 200, "data": 42}));

        let resp = ApiResponse::failure(StatusCode::BAD_REQUEST, "nope");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json, serde_json::json!({"status": 400, "error": "nope"}));
    }

    #[test]
    fn test_internal_error_message_is_generic() {
        let response = AppError::InternalServerError("connection refused".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
