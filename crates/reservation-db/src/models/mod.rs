//! Database models - SQLx-compatible structs for PostgreSQL tables

mod reservation;

pub use reservation::ReservationModel;
