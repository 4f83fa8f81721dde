use crate::error::PersistenceResult;
use crate::models::AddressBook;

/// Storage for the whole address book.
///
/// The book is read once at startup and written back once on exit; there is
/// no partial or incremental persistence.
pub trait AddressBookStore {
    /// Load the stored address book.
    ///
    /// Implementations return an empty book when nothing has been stored yet.
    fn load(&self) -> PersistenceResult<AddressBook>;

    /// Replace the stored address book with `book`.
    fn save(&self, book: &AddressBook) -> PersistenceResult<()>;
}
