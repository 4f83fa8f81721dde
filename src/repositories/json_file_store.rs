use crate::error::PersistenceResult;
use crate::models::AddressBook;
use crate::repositories::traits::AddressBookStore;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name used when no path is configured.
pub const DEFAULT_BOOK_PATH: &str = "addressbook.json";

/// Address book store backed by a single JSON file.
///
/// The whole book is written on every save. A missing file loads as an
/// empty book, so the first run needs no setup.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store reading and writing `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_BOOK_PATH)
    }
}

impl AddressBookStore for JsonFileStore {
    fn load(&self) -> PersistenceResult<AddressBook> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(
                    "No address book at {}, starting empty",
                    self.path.display()
                );
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        let book: AddressBook = serde_json::from_reader(BufReader::new(file))?;
        info!(
            "Loaded {} contacts from {}",
            book.len(),
            self.path.display()
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> PersistenceResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, book)?;
        writer.flush()?;

        debug!("Wrote address book to {}", self.path.display());
        info!("Saved {} contacts to {}", book.len(), self.path.display());
        Ok(())
    }
}
