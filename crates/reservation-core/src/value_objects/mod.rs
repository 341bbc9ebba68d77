//! Value objects - immutable types that represent domain concepts

mod email;
mod party_size;
mod reservation_id;

pub use email::EmailAddress;
pub use party_size::PartySize;
pub use reservation_id::{ReservationId, ReservationIdParseError};
