//! Response types for the payroll tool API.
//!
//! This module defines the error body of the direct tool endpoint and the
//! mapping from [`PayrollError`] to HTTP status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::PayrollError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PayrollError> for ApiErrorResponse {
    fn from(error: PayrollError) -> Self {
        let status = match &error {
            PayrollError::Validation { .. } => StatusCode::BAD_REQUEST,
            PayrollError::UnknownTool { .. } => StatusCode::NOT_FOUND,
            PayrollError::NoResult { .. }
            | PayrollError::Engine { .. }
            | PayrollError::Transport(_) => StatusCode::BAD_GATEWAY,
            PayrollError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            PayrollError::MissingCredential { .. }
            | PayrollError::ConfigParseError { .. }
            | PayrollError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let error = match &error {
            PayrollError::Validation { field, .. } => {
                ApiError::with_details(error.code(), error.to_string(), format!("field: {}", field))
            }
            _ => ApiError::new(error.code(), error.to_string()),
        };

        ApiErrorResponse { status, error }
    }
}
