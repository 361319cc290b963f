//! EmailAddress value object.

use super::errors::ValidationError;
use super::field::FieldKind;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-z][a-z0-9_.]+@[a-z.]+\.[a-z]{2,}$")
        .expect("Failed to compile email regex")
});

/// A type-safe wrapper for email addresses.
///
/// # Validation Rules
///
/// - The local part starts with a letter, followed by at least one letter,
///   digit, underscore or dot
/// - The domain is letters and dots, ending in a top-level segment of two or
///   more letters
/// - Matching is case-insensitive
///
/// # Example
///
/// ```
/// use contact_organizer::domain::EmailAddress;
///
/// let email = EmailAddress::new("santa.claus@north.pole").unwrap();
/// assert_eq!(email.domain(), "north.pole");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidFormat` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !Self::is_valid(&email) {
            return Err(ValidationError::InvalidFormat {
                kind: FieldKind::Email,
                value: email,
            });
        }

        Ok(Self(email))
    }

    /// Check whether a raw value is a valid email address.
    pub fn is_valid(email: &str) -> bool {
        EMAIL_REGEX.is_match(email)
    }

    /// Replace the stored value, keeping the old one if the new value is invalid.
    pub fn set(&mut self, email: impl Into<String>) -> Result<(), ValidationError> {
        *self = Self::new(email)?;
        Ok(())
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the local part (before '@').
    pub fn local_part(&self) -> &str {
        // The pattern admits exactly one '@'
        self.0.split_once('@').map(|(local, _)| local).unwrap_or("")
    }

    /// Get the domain part (after '@').
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map(|(_, domain)| domain).unwrap_or("")
    }
}

// Serde support - serialize as string
impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_email_valid() {
        let email = EmailAddress::new("user@example.com").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }

    #[test]
    fn test_email_validates_format() {
        assert!(EmailAddress::new("bad").is_err());
        assert!(EmailAddress::new("@example.com").is_err());
        assert!(EmailAddress::new("user@").is_err());
        assert!(EmailAddress::new("user@domain").is_err());
        assert!(EmailAddress::new("user@@example.com").is_err());
        assert!(EmailAddress::new("1user@example.com").is_err());
        assert!(EmailAddress::new("u@example.com").is_err());
        assert!(EmailAddress::new("user@example.c").is_err());
        assert!(EmailAddress::new("user+tag@example.com").is_err());
        assert!(EmailAddress::new("user@exa-mple.com").is_err());
        assert!(EmailAddress::new("first.last_1@mail.example.org").is_ok());
    }

    #[test]
    fn test_email_case_insensitive() {
        assert!(EmailAddress::new("John.Doe@Example.COM").is_ok());
    }

    #[test]
    fn test_email_parts() {
        let email = EmailAddress::new("user@example.com").unwrap();
        assert_eq!(email.local_part(), "user");
        assert_eq!(email.domain(), "example.com");
    }

    #[test]
    fn test_email_set_revalidates() {
        let mut email = EmailAddress::new("user@example.com").unwrap();
        assert!(email.set("not-an-email").is_err());
        assert_eq!(email.as_str(), "user@example.com");

        email.set("other@example.com").unwrap();
        assert_eq!(email.as_str(), "other@example.com");
    }

    #[test]
    fn test_email_deserialization_invalid_fails() {
        let result: Result<EmailAddress, _> = serde_json::from_str("\"invalid\"");
        assert!(result.is_err());
    }

    proptest! {
        #[test]
        fn prop_pattern_matches_are_accepted(
            email in "[a-z][a-z0-9_.]{1,12}@[a-z]{1,10}(\\.[a-z]{1,6})?\\.[a-z]{2,4}"
        ) {
            let parsed = EmailAddress::new(email.clone()).unwrap();
            prop_assert_eq!(parsed.as_str(), email.as_str());
        }
    }
}
