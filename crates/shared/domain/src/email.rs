//! Email value object.
//!
//! DDD: Value object - an `Email` can only be obtained through validation,
//! so holding one proves the address matches [`EMAIL_PATTERN`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::EMAIL_PATTERN;
use crate::error::{DomainError, DomainResult};

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// Validated email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate and wrap a raw address.
    ///
    /// No normalization is applied: case and surrounding characters are kept
    /// exactly as given.
    ///
    /// # Errors
    /// Returns `DomainError::InvalidEmailFormat` if the address does not match.
    pub fn parse(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        if EMAIL_REGEX.is_match(&raw) {
            Ok(Self(raw))
        } else {
            Err(DomainError::invalid_email(raw))
        }
    }

    /// Get the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validate a raw address, yielding `None` when it does not match.
///
/// A mismatch is not an error here, merely the absence of a value.
pub fn validate_email(raw: &str) -> Option<Email> {
    Email::parse(raw).ok()
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Email::parse(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_simple_address() {
        let email = validate_email("example@example.com").unwrap();
        assert_eq!(email.as_str(), "example@example.com");
    }

    #[test]
    fn test_accepts_subdomains_and_symbols() {
        for raw in ["a.b+c@mail.example.co.uk", "x@y.z", "first_last@host.io"] {
            let email = validate_email(raw);
            assert_eq!(email.as_ref().map(Email::as_str), Some(raw));
        }
    }

    #[test]
    fn test_keeps_case() {
        let email = validate_email("User@Example.COM").unwrap();
        assert_eq!(email.as_ref(), "User@Example.COM");
    }

    #[test]
    fn test_rejects_missing_at() {
        assert!(validate_email("example.example.com").is_none());
    }

    #[test]
    fn test_rejects_missing_dot_after_at() {
        assert!(validate_email("example@examplecom").is_none());
    }

    #[test]
    fn test_rejects_multiple_at() {
        assert!(validate_email("a@b@c.com").is_none());
    }

    #[test]
    fn test_rejects_whitespace() {
        assert!(validate_email(" example@example.com").is_none());
        assert!(validate_email("exa mple@example.com").is_none());
        assert!(validate_email("example@example.com\n").is_none());
        assert!(validate_email("example@exa\tmple.com").is_none());
    }

    #[test]
    fn test_rejects_unicode_whitespace() {
        for ws in ['\u{a0}', '\u{1680}', '\u{2003}', '\u{2028}', '\u{3000}', '\u{feff}', '\u{b}'] {
            let raw = format!("a{}b@c.d", ws);
            assert!(validate_email(&raw).is_none(), "accepted {:?}", raw);
        }
    }

    #[test]
    fn test_next_line_is_not_whitespace() {
        assert!(validate_email("a\u{85}b@c.d").is_some());
        assert!(validate_email("a\u{200b}b@c.d").is_some());
    }

    #[test]
    fn test_rejects_empty_parts() {
        assert!(validate_email("").is_none());
        assert!(validate_email("@example.com").is_none());
        assert!(validate_email("example@.com").is_none());
        assert!(validate_email("example@example.").is_none());
    }

    #[test]
    fn test_parse_reports_input() {
        let err = Email::parse("not-an-email").unwrap_err();
        assert_eq!(err, DomainError::InvalidEmailFormat("not-an-email".into()));
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Email = serde_json::from_str("\"example@example.com\"").unwrap();
        assert_eq!(ok.as_str(), "example@example.com");

        let bad = serde_json::from_str::<Email>("\"nope\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_serialize_as_plain_string() {
        let email = Email::parse("example@example.com").unwrap();
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"example@example.com\"");
    }
}
