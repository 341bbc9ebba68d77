//! Domain errors - error types for the domain layer

use chrono::NaiveDate;
use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Reservation date cannot be in the past: {0}")]
    DateInPast(NaiveDate),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid number of guests: {0}")]
    InvalidGuests(String),

    #[error("Invalid number of attendees: {0}")]
    InvalidAttendees(String),

    #[error("Invalid reservation type: {0} (expected 'table' or 'event')")]
    InvalidReservationType(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    /// Failure that may succeed on a later attempt (connection loss, pool timeout)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// The store refused the record; retrying will not help
    #[error("Database rejected record: {0}")]
    PersistenceRejected(String),

    /// Delivery failure that may succeed on a later attempt
    #[error("Notification error: {0}")]
    NotificationError(String),

    /// The mail provider refused the message; retrying will not help
    #[error("Notification rejected: {0}")]
    NotificationRejected(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Validation
            Self::MissingFields(_) => "MISSING_FIELDS",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidDate(_) => "INVALID_DATE",
            Self::DateInPast(_) => "DATE_IN_PAST",
            Self::InvalidTime(_) => "INVALID_TIME",
            Self::InvalidGuests(_) => "INVALID_GUESTS",
            Self::InvalidAttendees(_) => "INVALID_ATTENDEES",
            Self::InvalidReservationType(_) => "INVALID_RESERVATION_TYPE",
            Self::ValidationError(_) => "VALIDATION_ERROR",

            // Infrastructure
            Self::DatabaseError(_) | Self::PersistenceRejected(_) => "DATABASE_ERROR",
            Self::NotificationError(_) | Self::NotificationRejected(_) => "NOTIFICATION_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingFields(_)
                | Self::InvalidEmail
                | Self::InvalidDate(_)
                | Self::DateInPast(_)
                | Self::InvalidTime(_)
                | Self::InvalidGuests(_)
                | Self::InvalidAttendees(_)
                | Self::InvalidReservationType(_)
                | Self::ValidationError(_)
        )
    }

    /// Check if the failed operation is worth retrying
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::DatabaseError(_) | Self::NotificationError(_))
    }
}
