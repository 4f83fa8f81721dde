//! ContactName value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;

/// The name a contact is filed under.
///
/// `AddressBook` keys its records by `ContactName`, and lookups by plain
/// `&str` work through the `Borrow<str>` impl, so two names are the same key
/// exactly when their strings are equal. Matching is case-sensitive here;
/// the command layer lowercases every name before building one, which is
/// what makes `Alice` and `alice` the same contact to the user.
///
/// # Example
///
/// ```
/// use birthday_book::domain::ContactName;
/// use std::collections::HashMap;
///
/// let mut ages = HashMap::new();
/// ages.insert(ContactName::new("alice").unwrap(), 34);
/// assert_eq!(ages.get("alice"), Some(&34));
/// assert_eq!(ages.get("Alice"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName, validating that it's not blank.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the provided name is empty or
    /// whitespace only.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Hash and Eq are derived from the inner String, so they agree with str's.
impl Borrow<str> for ContactName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for ContactName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for ContactName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactName::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
