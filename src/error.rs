//! HTTP-facing error type.
//!
//! Every failure leaves the gateway as `{"error": "<message>"}`, which is the
//! shape the browser extension reads.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::alias::AliasError;
use crate::domain::ProviderError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Alias options that cannot produce an alias (412).
    #[error("{message}")]
    Validation { message: String },
    /// Malformed request (400).
    #[error("{message}")]
    BadRequest { message: String },
    /// Missing or wrong API token (401).
    #[error("{message}")]
    Unauthorized { message: String },
    /// The mail provider rejected or failed the call (500).
    #[error("{message}")]
    Upstream { message: String },
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::PRECONDITION_FAILED,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::Upstream { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<AliasError> for AppError {
    fn from(e: AliasError) -> Self {
        AppError::validation(e.to_string())
    }
}

impl From<ProviderError> for AppError {
    fn from(e: ProviderError) -> Self {
        AppError::upstream(e.to_string())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(e: ValidationErrors) -> Self {
        let message = e
            .field_errors()
            .into_values()
            .flatten()
            .find_map(|error| error.message.as_ref().map(ToString::to_string))
            .unwrap_or_else(|| "Invalid request".to_string());

        AppError::bad_request(message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::Upstream { message } => tracing::warn!("Upstream request failed: {message}"),
            AppError::Internal { message } => tracing::error!("Internal error: {message}"),
            _ => tracing::debug!(status = status.as_u16(), "Request rejected: {}", self),
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::validation("x").status(),
            StatusCode::PRECONDITION_FAILED
        );
        assert_eq!(AppError::bad_request("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::unauthorized("x").status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::upstream("x").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::internal("x").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_alias_errors_are_validation_errors() {
        let err = AppError::from(AliasError::UnknownTemplatePart("bad".to_string()));

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "Template part 'bad' is not allowed.");
    }

    #[test]
    fn test_provider_errors_are_upstream_errors() {
        let err = AppError::from(ProviderError::Request("timed out".to_string()));

        assert!(matches!(err, AppError::Upstream { .. }));
        assert_eq!(err.to_string(), "timed out");
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::bad_request("Invalid email format.").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::from(AliasError::MissingOptions).into_response();
        assert_eq!(response.status(), StatusCode::PRECONDITION_FAILED);
    }
}
