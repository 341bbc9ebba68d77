//! Notifier trait (port) - tells restaurant staff about new reservations

use async_trait::async_trait;

use crate::entities::Reservation;

use super::repositories::RepoResult;

/// Outcome of a notification that did not fail
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationReceipt {
    /// Provider-assigned message ID, if any
    pub message_id: Option<String>,
    /// False when delivery is switched off and nothing left the process
    pub delivered: bool,
}

impl NotificationReceipt {
    /// The provider accepted the message
    pub fn delivered(message_id: Option<String>) -> Self {
        Self {
            message_id,
            delivered: true,
        }
    }

    /// Delivery is disabled; the message was dropped on purpose
    pub fn skipped() -> Self {
        Self::default()
    }
}

#[async_trait]
pub trait ReservationNotifier: Send + Sync {
    /// Send one notification about a stored reservation.
    ///
    /// Retryable failures are `DomainError::NotificationError`, permanent
    /// ones `DomainError::NotificationRejected`.
    async fn notify(&self, reservation: &Reservation) -> RepoResult<NotificationReceipt>;

    /// Short name of the delivery mechanism, for health output and logs
    fn kind(&self) -> &'static str;
}
