//! Email address value object
//!
//! Only a basic syntactic check is applied: `local@domain.tld`, with no
//! whitespace and exactly one `@`. Deliverability is not our concern.

use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

/// `local@domain.tld` with no whitespace and a single `@`
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// A syntactically valid email address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parse an email address, trimming surrounding whitespace
    pub fn parse(raw: &str) -> Option<Self> {
        let candidate = raw.trim();
        if Self::is_valid(candidate) {
            Some(Self(candidate.to_string()))
        } else {
            None
        }
    }

    /// Whether `candidate` has the shape of an email address
    pub fn is_valid(candidate: &str) -> bool {
        EMAIL_PATTERN.is_match(candidate)
    }

    /// Borrow the address
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take ownership of the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for EmailAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
