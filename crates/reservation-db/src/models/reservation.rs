//! Reservation database model

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for reservations table
#[derive(Debug, Clone, FromRow)]
pub struct ReservationModel {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub guests: i32,
    pub message: Option<String>,
    pub reservation_type: String,
    pub event_type: Option<String>,
    pub event_type_custom: Option<String>,
    pub attendees: Option<i32>,
    pub event_description: Option<String>,
    pub created_at: DateTime<Utc>,
}
