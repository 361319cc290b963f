//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Default input and storage format for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// A contact's date of birth as a calendar date.
///
/// # Example
///
/// ```
/// use contact_organizer::domain::Birthday;
///
/// let birthday = Birthday::parse("1990-12-25").unwrap();
/// assert_eq!((birthday.month(), birthday.day()), (12, 25));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse a birthday in `YYYY-MM-DD` form.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDateFormat` if the value is not a
    /// real calendar date in that format.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::parse_with_format(raw, BIRTHDAY_FORMAT)
    }

    /// Parse a birthday using a `chrono` format string.
    pub fn parse_with_format(raw: &str, format: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(raw, format)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDateFormat {
                value: raw.to_string(),
                format: format.to_string(),
            })
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
