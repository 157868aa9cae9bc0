//! Shared HTTP error type and wire format.
//!
//! Every endpoint reports failures as `ErrorResponse { code, message, details }`
//! with a status picked from the error code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// Standard error response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// API error that implements IntoResponse.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(ErrorResponse),
    NotFound(ErrorResponse),
    Conflict(ErrorResponse),
    BadGateway(ErrorResponse),
    ServiceUnavailable(ErrorResponse),
    Internal(ErrorResponse),
}

impl ApiError {
    pub fn bad_request(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError::BadRequest(ErrorResponse::new(code, message))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> &ErrorResponse {
        match self {
            ApiError::BadRequest(body)
            | ApiError::NotFound(body)
            | ApiError::Conflict(body)
            | ApiError::BadGateway(body)
            | ApiError::ServiceUnavailable(body)
            | ApiError::Internal(body) => body,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(code = %self.body().code, message = %self.body().message, "Request failed");
        }
        let body = match self {
            ApiError::BadRequest(body)
            | ApiError::NotFound(body)
            | ApiError::Conflict(body)
            | ApiError::BadGateway(body)
            | ApiError::ServiceUnavailable(body)
            | ApiError::Internal(body) => body,
        };
        (status, Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let details = if err.details.is_empty() {
            None
        } else {
            serde_json::to_value(&err.details).ok()
        };
        let body = ErrorResponse {
            code: err.code.to_string(),
            message: err.message,
            details,
        };

        match err.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat
            | ErrorCode::QuestionNotFound
            | ErrorCode::MissingUpload
            | ErrorCode::UnsupportedMediaType
            | ErrorCode::ImageDecodeFailed => ApiError::BadRequest(body),
            ErrorCode::SessionNotFound | ErrorCode::CertificateMissing => ApiError::NotFound(body),
            ErrorCode::QuestionnaireIncomplete => ApiError::Conflict(body),
            ErrorCode::VisionProviderError => ApiError::BadGateway(body),
            ErrorCode::ClassifierUnavailable => ApiError::ServiceUnavailable(body),
            ErrorCode::ClassifierError | ErrorCode::StorageError | ErrorCode::InternalError => {
                ApiError::Internal(body)
            }
        }
    }
}

impl From<axum::extract::multipart::MultipartError> for ApiError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        ApiError::bad_request(ErrorCode::MissingUpload, err.body_text())
    }
}
