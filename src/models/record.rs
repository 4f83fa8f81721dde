//! Record model representing one person in the address book.

use crate::domain::{Birthday, ContactName, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the address book.
///
/// The name is fixed at construction and doubles as the directory key.
/// Phones keep insertion order and may repeat; every one of them is a
/// validated [`Phone`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Normalized contact name
    name: ContactName,

    /// Phone numbers in the order they were added
    #[serde(default)]
    phones: Vec<Phone>,

    /// Date of birth, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// The first phone added, if any.
    pub fn primary_phone(&self) -> Option<&Phone> {
        self.phones.first()
    }

    /// Validate `value` and append it to the phone list.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` and leaves the record
    /// unchanged if `value` is not ten digits.
    pub fn add_phone(&mut self, value: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(value)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `value`. Absent values are ignored.
    pub fn remove_phone(&mut self, value: &str) {
        self.phones.retain(|p| p.as_str() != value);
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// `new` is validated before the lookup, so a bad replacement fails even
    /// when `old` is absent. Returns `Ok(false)` when no phone matched.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `new` is not ten digits.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        let replacement = Phone::new(new)?;
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(slot) => {
                *slot = replacement;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Look up a phone by its string form.
    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Parse and store the birthday, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if `value` is not a valid
    /// `DD.MM.YYYY` date.
    pub fn set_birthday(&mut self, value: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(value)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
