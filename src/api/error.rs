//! Request-level failures and their HTTP status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use tracing::error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Body is not parseable JSON.
    InvalidBody,
    /// Query string could not be decoded.
    InvalidQuery,
    /// `text` is absent or null.
    MissingText,
    /// `text` is present but not a string.
    InvalidText,
    TextTooLong { max: usize },
    NotFound,
    /// Detail is logged, never sent to the client.
    Internal(String),
}

/// JSON body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody => StatusCode::BAD_REQUEST,
            ApiError::InvalidQuery => StatusCode::BAD_REQUEST,
            ApiError::MissingText => StatusCode::BAD_REQUEST,
            ApiError::InvalidText => StatusCode::BAD_REQUEST,
            ApiError::TextTooLong { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message.
    pub fn message(&self) -> String {
        match self {
            ApiError::InvalidBody => "Request body must be valid JSON".to_string(),
            ApiError::InvalidQuery => "Invalid query string".to_string(),
            ApiError::MissingText => "Missing \"text\" field".to_string(),
            ApiError::InvalidText => "\"text\" field must be a string".to_string(),
            ApiError::TextTooLong { max } => {
                format!("Text exceeds maximum length of {} characters", max)
            }
            ApiError::NotFound => "Not found".to_string(),
            ApiError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl From<crate::error::SlangError> for ApiError {
    fn from(e: crate::error::SlangError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            error!("Internal error while handling request: {}", detail);
        }

        let body = ErrorBody {
            success: false,
            error: self.message(),
        };
        (self.status(), Json(body)).into_response()
    }
}
