//! # HTTP API Errors
//!
//! Maps core outcomes onto status codes and JSON bodies:
//! - validation failure → 400 `{"error": [...]}`
//! - unknown id → 404 `{"message": "Movie not found"}`
//! - unknown route or method → 404 `<h2> 404 </h2>`

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::{Event, Logger};
use crate::schema::{FieldError, FieldErrorCode, ValidationErrors};
use crate::store::StoreError;

/// Field path used when the request body itself is unusable
pub const BODY_FIELD: &str = "$body";

/// Field path used when the query string cannot be decoded
pub const QUERY_FIELD: &str = "$query";

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Candidate movie failed schema validation
    #[error("{0}")]
    Validation(ValidationErrors),

    /// Requested id does not exist
    #[error("Movie not found")]
    NotFound,

    /// Body missing, not JSON, or wrong content type
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Query string does not decode, e.g. a repeated `genre`
    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidBody(_) | ApiError::InvalidQuery(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// `{"error": [...]}` body for rejected writes
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationErrorBody {
    pub error: Vec<FieldError>,
}

/// `{"message": "..."}` body
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::Validation(errors) => {
                let body = ValidationErrorBody {
                    error: errors.into_inner(),
                };
                (status, Json(body)).into_response()
            }
            ApiError::InvalidBody(reason) => malformed(status, BODY_FIELD, reason),
            ApiError::InvalidQuery(reason) => malformed(status, QUERY_FIELD, reason),
            ApiError::NotFound => (status, Json(MessageResponse::new("Movie not found"))).into_response(),
            ApiError::Internal(reason) => {
                Logger::error(Event::RequestFailed, &[("error", &reason)]);
                (status, Json(MessageResponse::new("Internal server error"))).into_response()
            }
        }
    }
}

fn malformed(status: StatusCode, field: &str, reason: String) -> Response {
    let body = ValidationErrorBody {
        error: vec![FieldError::new(field, FieldErrorCode::InvalidType, reason)],
    };
    (status, Json(body)).into_response()
}

/// HTML 404 for unmatched paths and unsupported methods on known paths
pub async fn not_found_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html("<h2> 404 </h2>"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let validation = ValidationErrors::single(FieldError::new(
            "title",
            FieldErrorCode::Required,
            "Title is required",
        ));
        assert_eq!(ApiError::Validation(validation).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidBody("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidQuery("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_not_found_maps_to_404() {
        let err = ApiError::from(StoreError::NotFound("abc".into()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_other_store_errors_are_internal() {
        let err = ApiError::from(StoreError::DuplicateId("abc".into()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
