//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use chrono::{FixedOffset, Offset, Utc};
use serde::Deserialize;
use std::env;
use std::str::FromStr;

use crate::i18n::Locale;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub mail: MailConfig,
    pub retry: RetryConfig,
    pub restaurant: RestaurantConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" | "dev" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Apply pending migrations at startup
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

/// Outbound email configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MailConfig {
    /// Delivery API key. Without one, notifications are only logged.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_mail_api_url")]
    pub api_url: String,
    #[serde(default = "default_mail_from")]
    pub from: String,
    /// Staff mailbox that receives every reservation
    pub admin_to: String,
    /// Also send a copy to the customer
    #[serde(default)]
    pub copy_customer: bool,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default = "default_mail_timeout_secs")]
    pub timeout_secs: u64,
}

impl MailConfig {
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}

/// Retry policy for persistence and notification
#[derive(Debug, Clone, Deserialize)]
pub struct RetryConfig {
    /// Total attempts, including the first one
    #[serde(default = "default_retry_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_retry_initial_delay_ms")]
    pub initial_delay_ms: u64,
    #[serde(default = "default_retry_max_delay_ms")]
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_retry_max_attempts(),
            initial_delay_ms: default_retry_initial_delay_ms(),
            max_delay_ms: default_retry_max_delay_ms(),
        }
    }
}

/// Restaurant-local settings
#[derive(Debug, Clone, Deserialize)]
pub struct RestaurantConfig {
    #[serde(default = "default_restaurant_name")]
    pub name: String,
    /// Offset from UTC used to decide what "today" is
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

impl RestaurantConfig {
    /// Restaurant's UTC offset. Out-of-range values fall back to UTC.
    #[must_use]
    pub fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes.saturating_mul(60)).unwrap_or_else(|| Utc.fix())
    }
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        Self {
            name: default_restaurant_name(),
            utc_offset_minutes: 0,
        }
    }
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    /// Empty means any origin is accepted
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "reservation-server".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_mail_api_url() -> String {
    "https://api.resend.com".to_string()
}

fn default_mail_from() -> String {
    "Reservations <reservations@example.com>".to_string()
}

fn default_mail_timeout_secs() -> u64 {
    10
}

fn default_retry_max_attempts() -> u32 {
    3
}

fn default_retry_initial_delay_ms() -> u64 {
    500
}

fn default_retry_max_delay_ms() -> u64 {
    5000
}

fn default_restaurant_name() -> String {
    "Restaurant".to_string()
}

fn default_requests_per_second() -> u32 {
    5
}

fn default_burst() -> u32 {
    20
}

/// Parse an optional variable, falling back to `default` when unset or blank.
fn parse_or<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        _ => Ok(default),
    }
}

fn parse_bool<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => match raw.trim().to_lowercase().as_str() {
            "" => Ok(default),
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidValue(key, raw)),
        },
        None => Ok(default),
    }
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or(ConfigError::MissingVar(key))
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    /// or a value cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// # Errors
    /// Same as [`AppConfig::from_env`]
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = match lookup("APP_ENV") {
            Some(raw) if !raw.trim().is_empty() => {
                Environment::parse(&raw).ok_or(ConfigError::InvalidValue("APP_ENV", raw))?
            }
            _ => default_env(),
        };

        let mail_locale = match lookup("MAIL_LOCALE") {
            Some(raw) if !raw.trim().is_empty() => {
                Locale::parse(&raw).ok_or(ConfigError::InvalidValue("MAIL_LOCALE", raw))?
            }
            _ => Locale::default(),
        };

        let restaurant = RestaurantConfig {
            name: lookup("RESTAURANT_NAME")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(default_restaurant_name),
            utc_offset_minutes: parse_or(&lookup, "RESTAURANT_UTC_OFFSET_MINUTES", 0)?,
        };
        // chrono only accepts offsets strictly inside +/- 24h
        if restaurant.utc_offset_minutes.unsigned_abs() >= 24 * 60 {
            return Err(ConfigError::InvalidValue(
                "RESTAURANT_UTC_OFFSET_MINUTES",
                restaurant.utc_offset_minutes.to_string(),
            ));
        }

        let retry = RetryConfig {
            max_attempts: parse_or(&lookup, "RETRY_MAX_ATTEMPTS", default_retry_max_attempts())?,
            initial_delay_ms: parse_or(
                &lookup,
                "RETRY_INITIAL_DELAY_MS",
                default_retry_initial_delay_ms(),
            )?,
            max_delay_ms: parse_or(&lookup, "RETRY_MAX_DELAY_MS", default_retry_max_delay_ms())?,
        };
        if retry.max_attempts == 0 {
            return Err(ConfigError::InvalidValue("RETRY_MAX_ATTEMPTS", "0".to_string()));
        }

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME")
                    .filter(|s| !s.trim().is_empty())
                    .unwrap_or_else(default_app_name),
                env,
            },
            api: ServerConfig {
                host: lookup("API_HOST")
                    .filter(|s| !s.trim().is_empty())
                    .unwrap_or_else(default_host),
                port: required(&lookup, "API_PORT").and_then(|raw| {
                    raw.parse()
                        .map_err(|_| ConfigError::InvalidValue("API_PORT", raw))
                })?,
            },
            database: DatabaseConfig {
                url: required(&lookup, "DATABASE_URL")?,
                max_connections: parse_or(
                    &lookup,
                    "DATABASE_MAX_CONNECTIONS",
                    default_max_connections(),
                )?,
                min_connections: parse_or(
                    &lookup,
                    "DATABASE_MIN_CONNECTIONS",
                    default_min_connections(),
                )?,
                run_migrations: parse_bool(&lookup, "DATABASE_RUN_MIGRATIONS", default_true())?,
            },
            mail: MailConfig {
                api_key: lookup("MAIL_API_KEY").filter(|s| !s.trim().is_empty()),
                api_url: lookup("MAIL_API_URL")
                    .filter(|s| !s.trim().is_empty())
                    .map(|s| s.trim_end_matches('/').to_string())
                    .unwrap_or_else(default_mail_api_url),
                from: lookup("MAIL_FROM")
                    .filter(|s| !s.trim().is_empty())
                    .unwrap_or_else(default_mail_from),
                admin_to: required(&lookup, "MAIL_ADMIN_TO")?,
                copy_customer: parse_bool(&lookup, "MAIL_COPY_CUSTOMER", false)?,
                locale: mail_locale,
                timeout_secs: parse_or(&lookup, "MAIL_TIMEOUT_SECS", default_mail_timeout_secs())?,
            },
            retry,
            restaurant,
            rate_limit: RateLimitConfig {
                requests_per_second: parse_or(
                    &lookup,
                    "RATE_LIMIT_REQUESTS_PER_SECOND",
                    default_requests_per_second(),
                )?,
                burst: parse_or(&lookup, "RATE_LIMIT_BURST", default_burst())?,
            },
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|o| !o.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
