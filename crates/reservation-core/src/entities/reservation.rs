//! Reservation entity - a customer's request to book a table or an event

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use crate::error::DomainError;
use crate::value_objects::{EmailAddress, PartySize, ReservationId};

/// Kind of booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationType {
    Table,
    Event,
}

impl ReservationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Event => "event",
        }
    }
}

impl fmt::Display for ReservationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "event" => Ok(Self::Event),
            other => Err(DomainError::InvalidReservationType(other.to_string())),
        }
    }
}

/// Kind of private event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Birthday,
    Anniversary,
    Wedding,
    Corporate,
    Graduation,
    Other,
}

impl EventType {
    /// Map a free-form value from the form; anything unrecognised becomes `Other`
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "birthday" => Self::Birthday,
            "anniversary" => Self::Anniversary,
            "wedding" => Self::Wedding,
            "corporate" => Self::Corporate,
            "graduation" => Self::Graduation,
            _ => Self::Other,
        }
    }

    /// Like [`EventType::from_str_lossy`], but also returns the trimmed input
    /// when it matched no known kind
    pub fn parse_free_form(s: &str) -> (Self, Option<String>) {
        let kind = Self::from_str_lossy(s);
        let trimmed = s.trim();
        let custom = (kind == Self::Other && !trimmed.eq_ignore_ascii_case("other"))
            .then(|| trimmed.to_string());
        (kind, custom)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Birthday => "birthday",
            Self::Anniversary => "anniversary",
            Self::Wedding => "wedding",
            Self::Corporate => "corporate",
            Self::Graduation => "graduation",
            Self::Other => "other",
        }
    }

    pub const ALL: [EventType; 6] = [
        Self::Birthday,
        Self::Anniversary,
        Self::Wedding,
        Self::Corporate,
        Self::Graduation,
        Self::Other,
    ];
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extra information collected for event bookings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventDetails {
    pub event_type: Option<EventType>,
    /// Customer's wording when `event_type` fell back to `Other`
    pub custom_event_type: Option<String>,
    pub attendees: Option<PartySize>,
    pub description: Option<String>,
}

/// Validated reservation data, not yet assigned an identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    pub name: String,
    pub email: EmailAddress,
    pub phone: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub guests: PartySize,
    pub message: Option<String>,
    pub reservation_type: ReservationType,
    /// Present exactly when `reservation_type` is `Event`
    pub event: Option<EventDetails>,
}

/// Reservation entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: ReservationId,
    pub name: String,
    pub email: EmailAddress,
    pub phone: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub guests: PartySize,
    pub message: Option<String>,
    pub reservation_type: ReservationType,
    pub event: Option<EventDetails>,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// Assign an identity and creation timestamp to validated data
    pub fn new(data: NewReservation) -> Self {
        Self {
            id: ReservationId::generate(),
            name: data.name,
            email: data.email,
            phone: data.phone,
            date: data.date,
            time: data.time,
            guests: data.guests,
            message: data.message,
            reservation_type: data.reservation_type,
            event: data.event,
            created_at: Utc::now(),
        }
    }

    /// Check if this is an event booking
    pub fn is_event(&self) -> bool {
        self.reservation_type == ReservationType::Event
    }

    /// Time of day as `HH:MM`
    pub fn time_label(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}
