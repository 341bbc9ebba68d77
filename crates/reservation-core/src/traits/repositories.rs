//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::Reservation;
use crate::error::DomainError;
use crate::value_objects::ReservationId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Reservation Repository
// ============================================================================

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Persist a new reservation.
    ///
    /// Implementations report retryable failures as `DomainError::DatabaseError`
    /// and permanent ones as `DomainError::PersistenceRejected`. Creating a
    /// reservation whose id is already stored succeeds without writing.
    async fn create(&self, reservation: &Reservation) -> RepoResult<()>;

    /// Find reservation by ID
    async fn find_by_id(&self, id: ReservationId) -> RepoResult<Option<Reservation>>;

    /// Check that the store is reachable
    async fn ping(&self) -> RepoResult<()>;
}
