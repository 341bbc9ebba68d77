//! Log-only notifier, used when email delivery is not configured

use async_trait::async_trait;
use tracing::info;

use reservation_common::Locale;
use reservation_core::{NotificationReceipt, RepoResult, Reservation, ReservationNotifier};

use crate::template::compose;

/// Renders the staff email and writes it to the log instead of sending it
#[derive(Debug, Clone)]
pub struct LogMailer {
    locale: Locale,
    restaurant_name: String,
}

impl LogMailer {
    pub fn new(locale: Locale, restaurant_name: &str) -> Self {
        Self {
            locale,
            restaurant_name: restaurant_name.to_string(),
        }
    }
}

#[async_trait]
impl ReservationNotifier for LogMailer {
    async fn notify(&self, reservation: &Reservation) -> RepoResult<NotificationReceipt> {
        let content = compose(reservation, self.locale.messages(), &self.restaurant_name);

        info!(
            reservation_id = %reservation.id,
            subject = %content.subject,
            "Email delivery disabled; reservation email not sent"
        );
        tracing::debug!(html = %content.html, "Rendered reservation email");

        Ok(NotificationReceipt::skipped())
    }

    fn kind(&self) -> &'static str {
        "disabled"
    }
}
