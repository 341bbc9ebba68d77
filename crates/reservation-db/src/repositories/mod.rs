//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in reservation-core.

mod error;
mod reservation;

pub use error::{is_transient, map_db_error};
pub use reservation::PgReservationRepository;
