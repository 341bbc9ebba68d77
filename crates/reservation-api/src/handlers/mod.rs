//! Route handlers
//!
//! All HTTP request handlers organized by concern.

pub mod form;
pub mod health;
pub mod reservations;
