//! Request DTOs for API endpoints
//!
//! Request DTOs implement `Deserialize` and `Validate`. Field-level limits
//! live here; cross-field rules (required fields, dates, party sizes) are
//! checked by `ReservationDraft::validate` in the domain layer.

use serde::{Deserialize, Deserializer};
use validator::Validate;

use reservation_core::ReservationDraft;

/// Reservation form submission.
///
/// Every field is optional at the JSON level so that a missing field is
/// reported as a validation error rather than a malformed body.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 254, message = "Email must be at most 254 characters"))]
    pub email: Option<String>,

    #[validate(length(max = 30, message = "Phone must be at most 30 characters"))]
    pub phone: Option<String>,

    pub date: Option<String>,

    pub time: Option<String>,

    /// Accepted as a JSON string or number
    #[serde(default, deserialize_with = "string_or_number")]
    pub guests: Option<String>,

    #[validate(length(max = 2000, message = "Message must be at most 2000 characters"))]
    pub message: Option<String>,

    pub reservation_type: Option<String>,

    #[validate(length(max = 100, message = "Event type must be at most 100 characters"))]
    pub event_type: Option<String>,

    /// Accepted as a JSON string or number
    #[serde(default, deserialize_with = "string_or_number")]
    pub attendees: Option<String>,

    #[validate(length(max = 2000, message = "Event description must be at most 2000 characters"))]
    pub event_description: Option<String>,
}

impl CreateReservationRequest {
    /// Hand the raw fields to the domain for validation
    pub fn into_draft(self) -> ReservationDraft {
        ReservationDraft {
            name: self.name,
            email: self.email,
            phone: self.phone,
            date: self.date,
            time: self.time,
            guests: self.guests,
            message: self.message,
            reservation_type: self.reservation_type,
            event_type: self.event_type,
            attendees: self.attendees,
            event_description: self.event_description,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Integer(i64),
    Float(f64),
}

/// Forms send counts as strings, scripts as numbers; keep both as text
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<StringOrNumber>::deserialize(deserializer)?.map(|value| match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Integer(n) => n.to_string(),
            StringOrNumber::Float(f) => f.to_string(),
        }),
    )
}
