//! Tagged validated field values.
//!
//! Each contact attribute is a value object that validates itself. This
//! module ties them together under one tag so callers holding a raw string
//! and a field kind (the command layer, importers) can construct the right
//! value without matching on the kind themselves.

use super::birthday::Birthday;
use super::email::EmailAddress;
use super::errors::ValidationError;
use super::name::{Address, ContactName};
use super::phone::PhoneNumber;
use std::fmt;
use std::str::FromStr;

/// The kinds of contact field the organizer knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Phone,
    Email,
    Birthday,
    Address,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Birthday => "birthday",
            Self::Address => "address",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "phone" => Ok(Self::Phone),
            "email" => Ok(Self::Email),
            "birthday" => Ok(Self::Birthday),
            "address" => Ok(Self::Address),
            other => Err(format!("unknown field: {}", other)),
        }
    }
}

/// A validated value of one field kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Name(ContactName),
    Phone(PhoneNumber),
    Email(EmailAddress),
    Birthday(Birthday),
    Address(Address),
}

impl FieldValue {
    /// Validate `raw` according to `kind`.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` for a malformed phone or email
    /// - `InvalidDateFormat` for a birthday that is not `YYYY-MM-DD`
    /// - `InvalidName` for an empty name
    pub fn construct(kind: FieldKind, raw: &str) -> Result<Self, ValidationError> {
        Ok(match kind {
            FieldKind::Name => Self::Name(ContactName::new(raw)?),
            FieldKind::Phone => Self::Phone(PhoneNumber::new(raw)?),
            FieldKind::Email => Self::Email(EmailAddress::new(raw)?),
            FieldKind::Birthday => Self::Birthday(Birthday::parse(raw)?),
            FieldKind::Address => Self::Address(Address::new(raw)),
        })
    }

    /// Re-validate `raw` against this value's own kind and store it.
    ///
    /// On failure the previous value is kept.
    pub fn set(&mut self, raw: &str) -> Result<(), ValidationError> {
        *self = Self::construct(self.kind(), raw)?;
        Ok(())
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Name(_) => FieldKind::Name,
            Self::Phone(_) => FieldKind::Phone,
            Self::Email(_) => FieldKind::Email,
            Self::Birthday(_) => FieldKind::Birthday,
            Self::Address(_) => FieldKind::Address,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(v) => write!(f, "{}", v),
            Self::Phone(v) => write!(f, "{}", v),
            Self::Email(v) => write!(f, "{}", v),
            Self::Birthday(v) => write!(f, "{}", v),
            Self::Address(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construct_dispatches_on_kind() {
        let phone = FieldValue::construct(FieldKind::Phone, "0501234567").unwrap();
        assert_eq!(phone.kind(), FieldKind::Phone);

        let address = FieldValue::construct(FieldKind::Address, "").unwrap();
        assert_eq!(address.to_string(), "");
    }

    #[test]
    fn test_construct_errors() {
        assert!(matches!(
            FieldValue::construct(FieldKind::Email, "bad"),
            Err(ValidationError::InvalidFormat { kind: FieldKind::Email, .. })
        ));
        assert!(matches!(
            FieldValue::construct(FieldKind::Birthday, "1990/01/01"),
            Err(ValidationError::InvalidDateFormat { .. })
        ));
        assert_eq!(
            FieldValue::construct(FieldKind::Name, ""),
            Err(ValidationError::InvalidName)
        );
    }

    #[test]
    fn test_set_keeps_kind_and_old_value_on_error() {
        let mut value = FieldValue::construct(FieldKind::Phone, "0501234567").unwrap();
        assert!(value.set("user@example.com").is_err());
        assert_eq!(value.to_string(), "0501234567");

        value.set("0671234567").unwrap();
        assert_eq!(value.kind(), FieldKind::Phone);
        assert_eq!(value.to_string(), "0671234567");
    }

    #[test]
    fn test_field_kind_from_str() {
        assert_eq!("Phone".parse::<FieldKind>(), Ok(FieldKind::Phone));
        assert!("fax".parse::<FieldKind>().is_err());
    }
}
