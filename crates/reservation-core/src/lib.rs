//! # reservation-core
//!
//! Domain layer containing the reservation entity, value objects, domain errors,
//! and the ports (repository and notifier traits) the service layer depends on.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{EventDetails, EventType, NewReservation, Reservation, ReservationDraft, ReservationType};
pub use error::DomainError;
pub use traits::{NotificationReceipt, RepoResult, ReservationNotifier, ReservationRepository};
pub use value_objects::{EmailAddress, PartySize, ReservationId, ReservationIdParseError};
