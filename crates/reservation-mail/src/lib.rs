//! # reservation-mail
//!
//! Staff notification emails for new reservations.
//!
//! ## Features
//!
//! - **Templates**: localized HTML summary of a reservation, with user input escaped
//! - **Resend mailer**: delivers through the Resend HTTP API
//! - **Log mailer**: stand-in used when no API key is configured
//!
//! ## Example
//!
//! ```ignore
//! use reservation_mail::notifier_from_config;
//!
//! let notifier = notifier_from_config(&config.mail, &config.restaurant.name)?;
//! notifier.notify(&reservation).await?;
//! ```

pub mod error;
pub mod log_mailer;
pub mod resend;
pub mod template;

use std::sync::Arc;

use reservation_common::MailConfig;
use reservation_core::ReservationNotifier;

pub use error::MailError;
pub use log_mailer::LogMailer;
pub use resend::{ResendMailer, SendEmailRequest};
pub use template::{compose, escape_html, EmailContent};

/// Pick the notifier matching the mail configuration.
///
/// A configured API key selects [`ResendMailer`]; otherwise messages are
/// only logged.
pub fn notifier_from_config(
    config: &MailConfig,
    restaurant_name: &str,
) -> Result<Arc<dyn ReservationNotifier>, MailError> {
    if config.is_enabled() {
        Ok(Arc::new(ResendMailer::from_config(config, restaurant_name)?))
    } else {
        tracing::warn!("MAIL_API_KEY not set; reservation emails will only be logged");
        Ok(Arc::new(LogMailer::new(config.locale, restaurant_name)))
    }
}
