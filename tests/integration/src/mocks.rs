//! In-memory ports
//!
//! Stand-ins for the Postgres repository and the mail notifier so the full
//! router can be driven without external services.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use reservation_core::{
    DomainError, NotificationReceipt, RepoResult, Reservation, ReservationId, ReservationNotifier,
    ReservationRepository,
};

/// How a port call should fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// Retryable (connection reset, provider 5xx)
    Transient,
    /// Not retryable (constraint violation, provider 4xx)
    Permanent,
}

/// Reservation store kept in a `Vec`
#[derive(Debug, Default)]
pub struct InMemoryReservationRepository {
    rows: Mutex<Vec<Reservation>>,
    create_calls: AtomicU32,
    failure: Mutex<Option<Failure>>,
    unreachable: AtomicBool,
}

impl InMemoryReservationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `create` fails the given way
    pub fn failing(failure: Failure) -> Self {
        let repo = Self::default();
        *repo.failure.lock().unwrap() = Some(failure);
        repo
    }

    /// `ping` reports the store as down
    pub fn unreachable() -> Self {
        let repo = Self::default();
        repo.unreachable.store(true, Ordering::SeqCst);
        repo
    }

    pub fn rows(&self) -> Vec<Reservation> {
        self.rows.lock().unwrap().clone()
    }

    pub fn create_calls(&self) -> u32 {
        self.create_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReservationRepository for InMemoryReservationRepository {
    async fn create(&self, reservation: &Reservation) -> RepoResult<()> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        match *self.failure.lock().unwrap() {
            Some(Failure::Transient) => {
                return Err(DomainError::DatabaseError("connection reset by peer".to_string()))
            }
            Some(Failure::Permanent) => {
                return Err(DomainError::PersistenceRejected("check constraint violated".to_string()))
            }
            None => {}
        }
        let mut rows = self.rows.lock().unwrap();
        if !rows.iter().any(|r| r.id == reservation.id) {
            rows.push(reservation.clone());
        }
        Ok(())
    }

    async fn find_by_id(&self, id: ReservationId) -> RepoResult<Option<Reservation>> {
        Ok(self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn ping(&self) -> RepoResult<()> {
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("connection refused".to_string()));
        }
        Ok(())
    }
}

/// Notifier that records what it was asked to send
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<ReservationId>>,
    calls: AtomicU32,
    failure: Mutex<Option<Failure>>,
    stall: Option<Duration>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `notify` fails the given way
    pub fn failing(failure: Failure) -> Self {
        let notifier = Self::default();
        *notifier.failure.lock().unwrap() = Some(failure);
        notifier
    }

    /// Every `notify` hangs for `stall`, then fails like a client-side timeout
    pub fn stalled(stall: Duration) -> Self {
        Self {
            stall: Some(stall),
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<ReservationId> {
        self.sent.lock().unwrap().clone()
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReservationNotifier for RecordingNotifier {
    async fn notify(&self, reservation: &Reservation) -> RepoResult<NotificationReceipt> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(stall) = self.stall {
            tokio::time::sleep(stall).await;
            return Err(DomainError::NotificationError("mail API timed out".to_string()));
        }
        match *self.failure.lock().unwrap() {
            Some(Failure::Transient) => {
                return Err(DomainError::NotificationError("provider returned 503".to_string()))
            }
            Some(Failure::Permanent) => {
                return Err(DomainError::NotificationRejected("provider returned 422".to_string()))
            }
            None => {}
        }
        self.sent.lock().unwrap().push(reservation.id);
        Ok(NotificationReceipt::delivered(Some(format!("test-{}", reservation.id))))
    }

    fn kind(&self) -> &'static str {
        "recording"
    }
}
