use birthday_book::error::PersistenceResult;
use birthday_book::{AddressBook, AddressBookStore};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Mock address book store for testing.
///
/// Keeps the "stored" book in memory and counts load/save calls so tests can
/// check that a session touches storage exactly once in each direction.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockBookStore {
    stored: RefCell<AddressBook>,
    call_counts: RefCell<HashMap<String, usize>>,
    fail_saves: Cell<bool>,
}

#[allow(dead_code)]
impl MockBookStore {
    /// Create a new empty MockBookStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let store = Self::new();
        *store.stored.borrow_mut() = book;
        store
    }

    /// The book as of the last save.
    pub fn stored(&self) -> AddressBook {
        self.stored.borrow().clone()
    }

    /// Make every following save fail with an I/O error.
    pub fn fail_saves(&self) {
        self.fail_saves.set(true);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.borrow().get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        *self
            .call_counts
            .borrow_mut()
            .entry(method.to_string())
            .or_insert(0) += 1;
    }
}

impl AddressBookStore for MockBookStore {
    fn load(&self) -> PersistenceResult<AddressBook> {
        self.track_call("load");
        Ok(self.stored())
    }

    fn save(&self, book: &AddressBook) -> PersistenceResult<()> {
        self.track_call("save");
        if self.fail_saves.get() {
            return Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full").into());
        }
        *self.stored.borrow_mut() = book.clone();
        Ok(())
    }
}
