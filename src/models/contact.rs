//! Contact model representing a person in the address book.

use crate::domain::{Address, Birthday, ContactName, EmailAddress, PhoneNumber, ValidationError};
use crate::error::{ContactError, ContactResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact record.
///
/// A contact is created with a name only; phones, email, birthday and
/// address are attached afterwards. The name is the address book key and
/// cannot change once the contact exists. Every other field is held as a
/// validated value object, so a contact never stores a malformed phone or
/// email.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    name: ContactName,

    /// Phone numbers in the order they were added. Duplicates are kept.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<EmailAddress>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<Address>,
}

impl Contact {
    /// Create a new contact with only a name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::with_name(ContactName::new(name)?))
    }

    /// Create a new contact from an already validated name.
    pub fn with_name(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            email: None,
            birthday: None,
            address: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, raw: &str) -> ContactResult<()> {
        self.phones.push(PhoneNumber::new(raw)?);
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// # Errors
    ///
    /// - `PhoneNotFound` if no phone equals `old`
    /// - `Validation` if `new` is not a valid phone; the old phone is kept
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactResult<()> {
        let phone = self
            .phones
            .iter_mut()
            .find(|phone| phone.as_str() == old)
            .ok_or_else(|| ContactError::PhoneNotFound(old.to_string()))?;
        phone.set(new)?;
        Ok(())
    }

    /// Validate and store the email, overwriting any existing one.
    pub fn add_email(&mut self, raw: &str) -> ContactResult<()> {
        self.email = Some(EmailAddress::new(raw)?);
        Ok(())
    }

    /// Change the existing email.
    ///
    /// # Errors
    ///
    /// - `NoEmailSet` if the contact has no email yet
    /// - `Validation` if `raw` is not a valid email
    pub fn edit_email(&mut self, raw: &str) -> ContactResult<()> {
        let email = self.email.as_mut().ok_or(ContactError::NoEmailSet)?;
        email.set(raw)?;
        Ok(())
    }

    /// Parse a `YYYY-MM-DD` birthday and store it, overwriting any prior one.
    pub fn set_birthday(&mut self, raw: &str) -> ContactResult<()> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    /// Parse a birthday with a custom `chrono` format string.
    pub fn set_birthday_with_format(&mut self, raw: &str, format: &str) -> ContactResult<()> {
        self.birthday = Some(Birthday::parse_with_format(raw, format)?);
        Ok(())
    }

    pub fn set_address(&mut self, raw: &str) {
        self.address = Some(Address::new(raw));
    }

    /// Whether any phone contains `query`, ignoring case.
    pub fn has_phone_containing(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.phones
            .iter()
            .any(|phone| phone.as_str().to_lowercase().contains(&query))
    }

    /// Human-readable summary listing only the fields that are set.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}", self.name)?;
        if !self.phones.is_empty() {
            let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
            write!(f, ", phones: {}", phones.join("; "))?;
        }
        if let Some(ref email) = self.email {
            write!(f, ", email: {}", email)?;
        }
        if let Some(ref birthday) = self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        if let Some(ref address) = self.address {
            write!(f, ", address: {}", address)?;
        }
        Ok(())
    }
}
