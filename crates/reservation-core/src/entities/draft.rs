//! Reservation draft - raw form input before domain validation
//!
//! Every field is optional text because that is what arrives from browsers.
//! `validate` turns a draft into a [`NewReservation`] or reports the first
//! violated rule.

use chrono::{DateTime, NaiveDate, NaiveTime, Timelike};

use crate::error::DomainError;
use crate::value_objects::{EmailAddress, PartySize};

use super::reservation::{EventDetails, EventType, NewReservation, ReservationType};

/// Unvalidated reservation input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub guests: Option<String>,
    pub message: Option<String>,
    pub reservation_type: Option<String>,
    pub event_type: Option<String>,
    pub attendees: Option<String>,
    pub event_description: Option<String>,
}

impl ReservationDraft {
    /// Validate the draft against the booking rules.
    ///
    /// `today` is the current calendar day in the restaurant's time zone;
    /// bookings for `today` are accepted, earlier dates are not.
    pub fn validate(self, today: NaiveDate) -> Result<NewReservation, DomainError> {
        let missing: Vec<&'static str> = [
            ("name", &self.name),
            ("email", &self.email),
            ("date", &self.date),
            ("time", &self.time),
            ("guests", &self.guests),
            ("reservationType", &self.reservation_type),
        ]
        .into_iter()
        .filter(|(_, value)| non_blank(value.as_deref()).is_none())
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(DomainError::MissingFields(missing));
        }

        let name = required(self.name)?;
        let email = EmailAddress::parse(&required(self.email)?).ok_or(DomainError::InvalidEmail)?;

        let date_raw = required(self.date)?;
        let date = parse_date(&date_raw).ok_or(DomainError::InvalidDate(date_raw))?;
        if date < today {
            return Err(DomainError::DateInPast(date));
        }

        let time_raw = required(self.time)?;
        let time = parse_time(&time_raw).ok_or(DomainError::InvalidTime(time_raw))?;

        let guests_raw = required(self.guests)?;
        let guests = PartySize::parse(&guests_raw).ok_or(DomainError::InvalidGuests(guests_raw))?;

        let reservation_type: ReservationType = required(self.reservation_type)?.parse()?;

        let event = match reservation_type {
            ReservationType::Table => None,
            ReservationType::Event => {
                let attendees = match non_blank(self.attendees.as_deref()) {
                    Some(raw) => Some(
                        PartySize::parse(raw)
                            .ok_or_else(|| DomainError::InvalidAttendees(raw.to_string()))?,
                    ),
                    None => None,
                };

                let (event_type, custom_event_type) = match non_blank(self.event_type.as_deref()) {
                    Some(raw) => {
                        let (kind, custom) = EventType::parse_free_form(raw);
                        (Some(kind), custom)
                    }
                    None => (None, None),
                };

                Some(EventDetails {
                    event_type,
                    custom_event_type,
                    attendees,
                    description: optional(self.event_description),
                })
            }
        };

        Ok(NewReservation {
            name,
            email,
            phone: optional(self.phone),
            date,
            time,
            guests,
            message: optional(self.message),
            reservation_type,
            event,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn optional(value: Option<String>) -> Option<String> {
    non_blank(value.as_deref()).map(str::to_string)
}

fn required(value: Option<String>) -> Result<String, DomainError> {
    optional(value).ok_or_else(|| DomainError::ValidationError("required field is empty".to_string()))
}

/// Accepts `YYYY-MM-DD` and full RFC 3339 timestamps (what `Date.toISOString()` produces)
fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Accepts `HH:MM` and `HH:MM:SS`; seconds are dropped
fn parse_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
        .and_then(|t| NaiveTime::from_hms_opt(t.hour(), t.minute(), 0))
}
