//! Service error types with HTTP status code mapping.
//!
//! [`ListingsError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::filters::{ValidationError, ValidationErrorKind};

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 1002,
///     "message": "invalid filter value: unknown status 'rented'"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message, safe to relay to the caller.
    pub message: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category   | HTTP Status                |
/// |-----------|------------|----------------------------|
/// | 1000–1999 | Bad input  | 400 Bad Request            |
/// | 2000–2999 | Conflict   | 409 Conflict               |
/// | 3000–3999 | Server     | 500 Internal Server Error  |
#[derive(Debug, thiserror::Error)]
pub enum ListingsError {
    /// A filter value has the wrong shape or type.
    #[error("invalid filter type: {0}")]
    InvalidType(String),

    /// A filter value has the right shape but is semantically invalid.
    #[error("invalid filter value: {0}")]
    InvalidValue(String),

    /// The user already liked the property.
    #[error("user {user_id} already liked property {property_id}")]
    AlreadyLiked {
        /// User that attempted the like.
        user_id: i64,
        /// Property that was already liked.
        property_id: i64,
    },

    /// Connectivity, timeout, or query execution failure in the data store.
    #[error("query failed: {0}")]
    BackendFailure(String),

    /// Anything not otherwise classified.
    #[error("unexpected error: {0}")]
    Internal(String),
}

impl ListingsError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidType(_) => 1001,
            Self::InvalidValue(_) => 1002,
            Self::AlreadyLiked { .. } => 2001,
            Self::Internal(_) => 3000,
            Self::BackendFailure(_) => 3001,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidType(_) | Self::InvalidValue(_) => StatusCode::BAD_REQUEST,
            Self::AlreadyLiked { .. } => StatusCode::CONFLICT,
            Self::BackendFailure(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns `true` when the failure was caused by the caller's input.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

impl From<sqlx::Error> for ListingsError {
    fn from(err: sqlx::Error) -> Self {
        Self::BackendFailure(err.to_string())
    }
}

impl From<ValidationError> for ListingsError {
    fn from(err: ValidationError) -> Self {
        match err.kind() {
            ValidationErrorKind::InvalidType => Self::InvalidType(err.to_string()),
            ValidationErrorKind::InvalidValue => Self::InvalidValue(err.to_string()),
        }
    }
}

impl IntoResponse for ListingsError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        }
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
