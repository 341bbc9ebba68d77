//! Reservation entity <-> model mapper

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use reservation_core::entities::{EventDetails, EventType, Reservation, ReservationType};
use reservation_core::error::DomainError;
use reservation_core::value_objects::{EmailAddress, PartySize, ReservationId};

use crate::models::ReservationModel;

fn corrupt_row(id: Uuid, field: &str) -> DomainError {
    DomainError::InternalError(format!("reservation {id} has an invalid {field} column"))
}

fn party_size(value: i32) -> Option<PartySize> {
    u32::try_from(value).ok().and_then(PartySize::new)
}

/// Convert a stored row back into the domain entity.
///
/// Fails only when the row violates invariants the table constraints
/// should have prevented.
impl TryFrom<ReservationModel> for Reservation {
    type Error = DomainError;

    fn try_from(model: ReservationModel) -> Result<Self, Self::Error> {
        let id = model.id;
        let email = EmailAddress::parse(&model.email).ok_or_else(|| corrupt_row(id, "email"))?;
        let guests = party_size(model.guests).ok_or_else(|| corrupt_row(id, "guests"))?;
        let reservation_type: ReservationType = model
            .reservation_type
            .parse()
            .map_err(|_| corrupt_row(id, "reservation_type"))?;

        let event = match reservation_type {
            ReservationType::Event => Some(EventDetails {
                event_type: model.event_type.as_deref().map(EventType::from_str_lossy),
                custom_event_type: model.event_type_custom,
                attendees: match model.attendees {
                    Some(n) => Some(party_size(n).ok_or_else(|| corrupt_row(id, "attendees"))?),
                    None => None,
                },
                description: model.event_description,
            }),
            ReservationType::Table => None,
        };

        Ok(Reservation {
            id: ReservationId::from(id),
            name: model.name,
            email,
            phone: model.phone,
            date: model.date,
            time: model.time,
            guests,
            message: model.message,
            reservation_type,
            event,
            created_at: model.created_at,
        })
    }
}

/// Reservation entity reference flattened to column values
pub struct ReservationInsert<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub guests: i32,
    pub message: Option<&'a str>,
    pub reservation_type: &'static str,
    pub event_type: Option<&'static str>,
    pub event_type_custom: Option<&'a str>,
    pub attendees: Option<i32>,
    pub event_description: Option<&'a str>,
    pub created_at: DateTime<Utc>,
}

impl<'a> ReservationInsert<'a> {
    pub fn new(reservation: &'a Reservation) -> Self {
        let event = reservation.event.as_ref();

        Self {
            id: reservation.id.into_inner(),
            name: &reservation.name,
            email: reservation.email.as_str(),
            phone: reservation.phone.as_deref(),
            date: reservation.date,
            time: reservation.time,
            // PartySize is capped well below i32::MAX
            guests: i32::try_from(reservation.guests.get()).unwrap_or(i32::MAX),
            message: reservation.message.as_deref(),
            reservation_type: reservation.reservation_type.as_str(),
            event_type: event.and_then(|e| e.event_type).map(|t| t.as_str()),
            event_type_custom: event.and_then(|e| e.custom_event_type.as_deref()),
            attendees: event
                .and_then(|e| e.attendees)
                .map(|a| i32::try_from(a.get()).unwrap_or(i32::MAX)),
            event_description: event.and_then(|e| e.description.as_deref()),
            created_at: reservation.created_at,
        }
    }
}
