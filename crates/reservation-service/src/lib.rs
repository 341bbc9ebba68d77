//! # reservation-service
//!
//! Application layer: request/response DTOs, the retry policy, and the
//! reservation submission pipeline.

pub mod dto;
pub mod retry;
pub mod services;

pub use dto::{
    CreateReservationRequest, HealthChecks, HealthResponse, ReadinessResponse,
    ReservationCreatedResponse,
};
pub use retry::{retry_with_predicate, RetryPolicy};
pub use services::{ReservationService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult};
