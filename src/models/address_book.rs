//! The address book: every record, keyed by contact name.

use crate::error::{BookError, BookResult};
use crate::domain::ContactName;
use crate::models::Record;
use crate::services::birthdays::{self, UpcomingBirthday};
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Insertion-ordered mapping from contact name to [`Record`].
///
/// Adding a record under a name that already exists replaces the old record
/// in place, so iteration order reflects when a name was first added.
/// Serialized as a plain list of records; the keys are rebuilt from the
/// record names on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
    records: IndexMap<ContactName, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, silently replacing any existing one.
    pub fn add_record(&mut self, record: Record) {
        self.records.insert(record.name().clone(), record);
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if no record has that name.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        self.records
            .shift_remove(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Greeting dates for every contact with a birthday, relative to `today`.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        birthdays::upcoming_birthdays(self, today)
    }
}

impl From<Vec<Record>> for AddressBook {
    fn from(records: Vec<Record>) -> Self {
        records.into_iter().collect()
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(book: AddressBook) -> Self {
        book.records.into_values().collect()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Self::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = indexmap::map::Values<'a, ContactName, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phone: &str) -> Record {
        let mut r = Record::new(ContactName::new(name).unwrap());
        r.add_phone(phone).unwrap();
        r
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        let r = record("alice", "1111111111");
        book.add_record(r.clone());

        assert_eq!(book.find("alice"), Some(&r));
        assert!(book.find("bob").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_add_overwrites_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("alice", "1111111111"));
        book.add_record(record("bob", "2222222222"));
        book.add_record(record("alice", "3333333333"));

        assert_eq!(book.len(), 2);
        let names: Vec<&str> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, ["alice", "bob"]);
        assert_eq!(
            book.find("alice").unwrap().primary_phone().unwrap().as_str(),
            "3333333333"
        );
    }

    #[test]
    fn test_delete() {
        let mut book = AddressBook::new();
        book.add_record(record("alice", "1111111111"));

        let removed = book.delete("alice").unwrap();
        assert_eq!(removed.name().as_str(), "alice");
        assert!(book.find("alice").is_none());
        assert!(book.is_empty());
    }

    #[test]
    fn test_delete_missing_fails() {
        let mut book = AddressBook::new();
        assert_eq!(
            book.delete("ghost"),
            Err(BookError::NotFound("ghost".to_string()))
        );
    }

    #[test]
    fn test_delete_keeps_remaining_order() {
        let mut book: AddressBook = ["a", "b", "c"]
            .into_iter()
            .map(|n| record(n, "1111111111"))
            .collect();
        book.delete("b").unwrap();

        let names: Vec<&str> = (&book).into_iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, ["a", "c"]);
    }

    #[test]
    fn test_find_mut_edits_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("alice", "1111111111"));

        book.find_mut("alice")
            .unwrap()
            .set_birthday("10.06.1990")
            .unwrap();
        assert!(book.find("alice").unwrap().birthday().is_some());
    }

    #[test]
    fn test_serializes_as_record_list() {
        let mut book = AddressBook::new();
        book.add_record(record("alice", "1111111111"));

        let json = serde_json::to_string(&book).unwrap();
        assert_eq!(json, r#"[{"name":"alice","phones":["1111111111"]}]"#);

        let back: AddressBook = serde_json::from_str(&json).unwrap();
        assert_eq!(back, book);
    }
}
