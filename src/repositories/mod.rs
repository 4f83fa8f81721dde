mod json_file_store;
mod traits;

pub use json_file_store::{JsonFileStore, DEFAULT_BOOK_PATH};
pub use traits::AddressBookStore;
