//! Email Value Object
//!
//! Represents a validated, sanitized email address.
//! Basic format validation only - actual ownership is established via the
//! verification flag on the user entity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Maximum local part length (per RFC 5321)
const LOCAL_MAX_LENGTH: usize = 64;

/// Characters permitted in an address beyond ASCII alphanumerics
const ALLOWED_SPECIAL_CHARS: &[char] = &[
    '!', '#', '$', '%', '&', '\'', '*', '+', '-', '/', '=', '?', '^', '_', '`', '{', '|', '}',
    '~', '@', '.', '[', ']',
];

/// Error returned when email validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// Address is empty after trimming
    Empty,

    /// Address is too long (maximum: EMAIL_MAX_LENGTH)
    TooLong { length: usize, max: usize },

    /// Address does not have the shape local@domain
    InvalidFormat,
}

impl fmt::Display for EmailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Email address cannot be empty"),
            Self::TooLong { length, max } => {
                write!(f, "Email address is too long ({length} chars, maximum {max})")
            }
            Self::InvalidFormat => write!(f, "Email address is not well formed"),
        }
    }
}

impl std::error::Error for EmailError {}

/// Email address value object
///
/// # Invariants
/// - Non-empty, at most EMAIL_MAX_LENGTH characters
/// - Exactly one `@`, with a non-empty local part and a dotted domain
/// - Stored form contains only characters from the allowed email set
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    ///
    /// Validation runs on the trimmed raw input, so a malformed address
    /// errors instead of being silently repaired. The stored form is the
    /// sanitized address with disallowed characters stripped.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, EmailError> {
        let raw = raw.as_ref().trim();

        if raw.is_empty() {
            return Err(EmailError::Empty);
        }

        let length = raw.chars().count();
        if length > EMAIL_MAX_LENGTH {
            return Err(EmailError::TooLong {
                length,
                max: EMAIL_MAX_LENGTH,
            });
        }

        if !Self::is_valid_format(raw) {
            return Err(EmailError::InvalidFormat);
        }

        Ok(Self(Self::sanitize(raw)))
    }

    /// Basic email format validation
    fn is_valid_format(email: &str) -> bool {
        // Must contain exactly one @
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };
        if domain.contains('@') {
            return false;
        }

        // Local part checks
        if local.is_empty() || local.chars().count() > LOCAL_MAX_LENGTH {
            return false;
        }
        if !local.chars().all(Self::is_allowed_char) {
            return false;
        }

        // Domain checks
        if domain.is_empty() || !domain.contains('.') {
            return false;
        }
        if !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return false;
        }

        // Domain must not start or end with dot or hyphen
        if domain.starts_with('.') || domain.ends_with('.') {
            return false;
        }
        if domain.starts_with('-') || domain.ends_with('-') {
            return false;
        }

        true
    }

    /// Strip every character outside the allowed email set
    fn sanitize(email: &str) -> String {
        email.chars().filter(|&c| Self::is_allowed_char(c)).collect()
    }

    fn is_allowed_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || ALLOWED_SPECIAL_CHARS.contains(&c)
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the domain part of the email
    pub fn domain(&self) -> &str {
        self.0.split('@').nth(1).unwrap_or("")
    }

    /// Get the local part of the email
    pub fn local_part(&self) -> &str {
        self.0.split('@').next().unwrap_or("")
    }
}

impl FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, EmailError> {
        Email::new(s)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("user@example.com").is_ok());
        assert!(Email::new("User@Example.COM").is_ok());
        assert!(Email::new("user.name@example.co.jp").is_ok());
        assert!(Email::new("user+tag@example.com").is_ok());
        assert!(Email::new("  user@example.com  ").is_ok()); // trimmed
    }

    #[test]
    fn test_email_invalid() {
        assert!(matches!(Email::new(""), Err(EmailError::Empty)));
        assert!(matches!(Email::new("   "), Err(EmailError::Empty)));
        assert!(matches!(
            Email::new("userexample.com"),
            Err(EmailError::InvalidFormat)
        ));
        assert!(Email::new("user@").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("user@@example.com").is_err());
        assert!(Email::new("user@example").is_err());
        assert!(Email::new("us er@example.com").is_err());
        assert!(Email::new("user@.example.com").is_err());
        assert!(Email::new("user@example.com-").is_err());
    }

    #[test]
    fn test_email_too_long() {
        let raw = format!("{}@example.com", "a".repeat(250));
        assert!(matches!(Email::new(raw), Err(EmailError::TooLong { .. })));
    }

    #[test]
    fn test_email_preserves_case() {
        let email = Email::new("User@Example.COM").unwrap();
        assert_eq!(email.as_str(), "User@Example.COM");
    }

    #[test]
    fn test_email_parts() {
        let email = Email::new("user@example.com").unwrap();
        assert_eq!(email.domain(), "example.com");
        assert_eq!(email.local_part(), "user");
    }

    #[test]
    fn test_from_str() {
        let email: Email = "user@example.com".parse().unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }
}
