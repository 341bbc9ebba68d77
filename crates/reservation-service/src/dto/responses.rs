//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;

use reservation_common::Locale;
use reservation_core::Reservation;

// ============================================================================
// Reservation Responses
// ============================================================================

/// Body returned after a reservation has been stored
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCreatedResponse {
    pub success: bool,
    pub message: String,
    pub reservation_id: String,
    /// Whether the staff notification actually went out
    pub email_sent: bool,
}

impl ReservationCreatedResponse {
    pub fn new(reservation: &Reservation, locale: Locale, email_sent: bool) -> Self {
        Self {
            success: true,
            message: locale.messages().reservation_submitted.to_string(),
            reservation_id: reservation.id.to_string(),
            email_sent,
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Status of each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    /// Notifier kind (`resend`, `disabled`, ...)
    pub mail: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, mail_kind: &str) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
                mail: mail_kind.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
