//! Entity to model mappers
//!
//! Conversions between the domain entity (reservation-core) and the database model.
//! - `TryFrom<ReservationModel> for Reservation`: database row to domain object
//! - `ReservationInsert`: entity data prepared for an INSERT

mod reservation;

pub use reservation::ReservationInsert;
