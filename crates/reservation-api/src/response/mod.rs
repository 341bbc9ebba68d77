//! Response types and error handling for API endpoints
//!
//! Every error leaves the server as `{error, message, code, details?}` with
//! `message` taken from the caller's locale.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use reservation_common::{domain_status, AppError, ErrorResponse, Locale};
use reservation_core::DomainError;
use reservation_service::ServiceError;
use serde_json::json;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid request format: {0}")]
    InvalidRequest(String),

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        let status = match self {
            Self::App(e) => e.status_code(),
            Self::Service(e) => e.status_code(),
            Self::Domain(e) => domain_status(e),
            Self::Validation(_) | Self::InvalidRequest(_) => 400,
            Self::MethodNotAllowed => 405,
        };
        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidRequest(_) => "INVALID_REQUEST_FORMAT",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
        }
    }

    /// Create an invalid request format error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Attach the caller's locale for rendering
    #[must_use]
    pub fn localized(self, locale: Locale) -> LocalizedError {
        LocalizedError {
            error: self,
            locale,
        }
    }

    fn missing_fields(&self) -> Option<&[&'static str]> {
        match self {
            Self::Service(e) => e.missing_fields(),
            Self::Domain(DomainError::MissingFields(fields))
            | Self::App(AppError::Domain(DomainError::MissingFields(fields))) => Some(fields.as_slice()),
            _ => None,
        }
    }

    /// User-facing message in `locale`.
    ///
    /// Server errors never echo internal detail.
    fn message(&self, locale: Locale) -> String {
        let messages = locale.messages();
        if let Some(text) = messages.error_message(self.error_code()) {
            return text.to_string();
        }
        if self.status_code().is_server_error() {
            return messages.unexpected_error.to_string();
        }
        self.to_string()
    }

    fn details(&self) -> Option<serde_json::Value> {
        if let Some(fields) = self.missing_fields() {
            return Some(json!({ "fields": fields }));
        }
        match self {
            Self::Validation(errors) => Some(serde_json::to_value(errors).unwrap_or_default()),
            Self::InvalidRequest(reason) => Some(json!({ "reason": reason })),
            _ => None,
        }
    }

    /// Build the JSON body for `locale`
    pub fn to_body(&self, locale: Locale) -> ErrorResponse {
        let body = ErrorResponse::new(
            self.status_code().as_u16(),
            self.error_code(),
            self.message(locale),
        );
        match self.details() {
            Some(details) => body.with_details(details),
            None => body,
        }
    }
}

/// An [`ApiError`] paired with the language it should be reported in
#[derive(Debug)]
pub struct LocalizedError {
    pub error: ApiError,
    pub locale: Locale,
}

impl From<ApiError> for LocalizedError {
    fn from(err: ApiError) -> Self {
        err.localized(Locale::default())
    }
}

impl IntoResponse for LocalizedError {
    fn into_response(self) -> Response {
        let status = self.error.status_code();

        // Log server errors
        if status.is_server_error() {
            error!(error = ?self.error, "Server error occurred");
        }

        (status, Json(self.error.to_body(self.locale))).into_response()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.localized(Locale::default()).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, LocalizedError>;
