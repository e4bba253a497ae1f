//! Application error taxonomy and its HTTP mapping.
//!
//! Every failure that reaches the HTTP boundary is rendered as
//! `{"detail": <message>, "code": <machine code>}` with a non-2xx status.
//! Internal distinctions (which retry attempt failed, raw database errors)
//! are logged but never exposed.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
    pub code: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The target URL is not a well-formed absolute http(s) URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A caller-supplied alias violates the code charset, length, or reserved list.
    #[error("Invalid custom code: {0}")]
    InvalidCode(String),

    /// A caller-supplied alias is already bound to a mapping.
    #[error("Custom code '{0}' is already taken")]
    CodeTaken(String),

    /// Random generation hit a collision on every attempt.
    #[error("Could not allocate a unique short code, please retry")]
    GenerationExhausted,

    #[error("Short link not found")]
    NotFound,

    /// The request body could not be parsed into the expected shape.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// The backing store failed. Always fatal to the request.
    #[error("Storage failure: {0}")]
    Storage(String),
}

impl AppError {
    /// Stable machine-readable identifier for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidUrl(_) => "invalid_url",
            AppError::InvalidCode(_) => "invalid_code",
            AppError::CodeTaken(_) => "code_taken",
            AppError::GenerationExhausted => "generation_exhausted",
            AppError::NotFound => "not_found",
            AppError::MalformedRequest(_) => "malformed_request",
            AppError::Storage(_) => "storage_failure",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl(_) | AppError::InvalidCode(_) | AppError::MalformedRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::CodeTaken(_) => StatusCode::CONFLICT,
            AppError::GenerationExhausted => StatusCode::SERVICE_UNAVAILABLE,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Human-readable message surfaced to callers.
    ///
    /// Storage failures get a generic message; the underlying cause is only logged.
    pub fn detail(&self) -> String {
        match self {
            AppError::Storage(_) => "Internal storage error".to_string(),
            other => other.to_string(),
        }
    }

    pub fn to_error_body(&self) -> ErrorBody {
        ErrorBody {
            detail: self.detail(),
            code: self.code(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Storage(cause) = &self {
            tracing::error!("Storage failure: {}", cause);
        }

        (self.status(), Json(self.to_error_body())).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Storage(e.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedRequest(rejection.body_text())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors.field_errors();

        if fields.contains_key("url") {
            return AppError::InvalidUrl("URL is too long".to_string());
        }
        if fields.contains_key("custom_path") {
            return AppError::InvalidCode("custom path is too long".to_string());
        }

        AppError::InvalidUrl(errors.to_string())
    }
}
