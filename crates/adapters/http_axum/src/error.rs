//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use acctdir_domain::error::{DirectoryError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

/// Maps [`DirectoryError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(DirectoryError);

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// Status code and body this error renders to.
    #[must_use]
    pub fn parts(&self) -> (StatusCode, ErrorBody) {
        match &self.0 {
            DirectoryError::Validation(err @ ValidationError::InvalidSignup) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    message: "Account creation failed",
                    cause: Some(err.to_string()),
                },
            ),
            DirectoryError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    message: "User updation failed",
                    cause: Some(err.to_string()),
                },
            ),
            DirectoryError::Conflict(err) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    message: "Account creation failed",
                    cause: Some(err.to_string()),
                },
            ),
            DirectoryError::Authentication => (
                StatusCode::UNAUTHORIZED,
                ErrorBody {
                    message: "Authentication Failed",
                    cause: None,
                },
            ),
            DirectoryError::Forbidden(_) => (
                StatusCode::FORBIDDEN,
                ErrorBody {
                    message: "No Permission for Update",
                    cause: None,
                },
            ),
            DirectoryError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    message: "No User found",
                    cause: None,
                },
            ),
            DirectoryError::Credential(_) | DirectoryError::Storage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    message: "internal server error",
                    cause: None,
                },
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if matches!(
            self.0,
            DirectoryError::Credential(_) | DirectoryError::Storage(_)
        ) {
            tracing::error!(error = ?self.0, "account directory failure");
        }
        let (status, body) = self.parts();
        (status, Json(body)).into_response()
    }
}
