//! Domain entities - core business objects

mod draft;
mod reservation;

pub use draft::ReservationDraft;
pub use reservation::{EventDetails, EventType, NewReservation, Reservation, ReservationType};
