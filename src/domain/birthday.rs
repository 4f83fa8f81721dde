//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Input and display format for birthdays (`DD.MM.YYYY`).
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A contact's date of birth.
///
/// Parsed from and rendered as `DD.MM.YYYY`. Internally a naive calendar
/// date; no time zone is ever attached.
///
/// # Example
///
/// ```
/// use birthday_book::domain::Birthday;
///
/// let birthday = Birthday::parse("15.06.1985").unwrap();
/// assert_eq!(birthday.to_string(), "15.06.1985");
/// assert!(Birthday::parse("31.02.1985").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` for the wrong format, a
    /// non-numeric component, or a day/month that does not exist. Day and
    /// month must be two digits and the year four; chrono alone would also
    /// take `1.6.90` or a signed year.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidBirthday(value.to_string());

        let birthday = NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| invalid())?;
        if birthday.to_string() != value {
            return Err(invalid());
        }
        Ok(birthday)
    }

    /// The occurrence of this birthday in `year`.
    ///
    /// February 29 falls back to February 28 when `year` is not a leap year.
    pub fn in_year(&self, year: i32) -> NaiveDate {
        let projected = self
            .0
            .with_year(year)
            .or_else(|| NaiveDate::from_ymd_opt(year, self.0.month(), 28));

        // Only `None` for years outside chrono's range (about +/-262,000).
        debug_assert!(projected.is_some(), "year {} is out of range", year);
        projected.unwrap_or(self.0)
    }
}

// Serde support - serialize in the display format
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// Serde support - deserialize from string with validation
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
