//! Axum extractors for request handling
//!
//! Custom extractors for locale negotiation and validated JSON bodies.

mod locale;
mod validated;

pub use locale::RequestLocale;
pub use validated::ValidatedJson;
