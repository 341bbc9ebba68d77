//! Ports - traits implemented by the infrastructure crates

mod notifier;
mod repositories;

pub use notifier::{NotificationReceipt, ReservationNotifier};
pub use repositories::{RepoResult, ReservationRepository};
