//! # reservation-common
//!
//! Shared utilities including configuration, error handling, telemetry,
//! and the localized message catalogue.

pub mod config;
pub mod error;
pub mod i18n;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, MailConfig,
    RateLimitConfig, RestaurantConfig, RetryConfig, ServerConfig,
};
pub use error::{domain_status, status_title, AppError, AppResult, ErrorResponse};
pub use i18n::{Locale, Messages};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
