//! Business logic services
//!
//! Service layer implementations that validate input and orchestrate the
//! repository and notifier ports.

pub mod context;
pub mod error;
pub mod reservation;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use reservation::ReservationService;
