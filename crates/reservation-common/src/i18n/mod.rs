//! Localized text for responses, emails and the reservation form

mod locale;
mod messages;

pub use locale::Locale;
pub use messages::Messages;
