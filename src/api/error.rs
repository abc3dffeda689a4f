//! API error types and their HTTP mapping.

use crate::utils::error::DopcError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("venue not found: {0}")]
    VenueNotFound(String),

    #[error("venue {0} does not deliver to the given location")]
    OutOfRange(String),

    #[error("venue service failure: {0}")]
    Upstream(String),

    #[error("internal server error: {0}")]
    Internal(String),
}

impl From<DopcError> for ApiError {
    fn from(err: DopcError) -> Self {
        match err {
            DopcError::VenueNotFound { slug } => ApiError::VenueNotFound(slug),
            DopcError::Upstream(_)
            | DopcError::UpstreamStatus { .. }
            | DopcError::VenueData { .. }
            | DopcError::Serialization(_) => ApiError::Upstream(err.to_string()),
            DopcError::InvalidValue { .. } => ApiError::InvalidRequest(err.to_string()),
            DopcError::Config { .. } => ApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            ApiError::VenueNotFound(_) => (StatusCode::NOT_FOUND, "venue_not_found"),
            ApiError::OutOfRange(_) => (StatusCode::BAD_REQUEST, "out_of_range"),
            ApiError::Upstream(_) => (StatusCode::BAD_GATEWAY, "upstream_error"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

/// Result type alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
