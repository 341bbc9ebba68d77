//! Error types for the email delivery client

use reservation_core::DomainError;
use thiserror::Error;

/// Errors that can occur when talking to the email API
#[derive(Debug, Error)]
pub enum MailError {
    /// No API key configured
    #[error("Missing MAIL_API_KEY")]
    MissingApiKey,

    /// HTTP client could not be constructed
    #[error("HTTP client setup failed: {0}")]
    ClientSetup(String),

    /// Request never got a response (connect error, reset, ...)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Rate limited - too many requests
    #[error("Rate limited - too many requests")]
    RateLimited,

    /// Unauthorized - invalid API key
    #[error("Unauthorized - invalid API key")]
    Unauthorized,

    /// API returned an error
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error body from the API
        message: String,
    },
}

impl MailError {
    /// Whether the same message may go through on a later attempt
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::RequestFailed(_) | Self::Timeout | Self::RateLimited => true,
            Self::ApiError { status, .. } => *status >= 500,
            Self::MissingApiKey | Self::ClientSetup(_) | Self::Unauthorized => false,
        }
    }
}

impl From<reqwest::Error> for MailError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::RequestFailed(e.to_string())
        }
    }
}

impl From<MailError> for DomainError {
    fn from(e: MailError) -> Self {
        if e.is_transient() {
            DomainError::NotificationError(e.to_string())
        } else {
            DomainError::NotificationRejected(e.to_string())
        }
    }
}
