pub mod memory;
pub mod stores;

use crate::prelude::{AddressBook, AppError};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

pub const DEFAULT_STORAGE_PATH: &str = "./.instance/addressbook.json";

pub trait BookStore {
    fn load(&self) -> Result<AddressBook, AppError>;

    fn save(&self, book: &AddressBook) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMediums {
    Json,
    Mem,
}

impl StorageMediums {
    pub fn is_json(&self) -> bool {
        matches!(self, StorageMediums::Json)
    }

    pub fn is_mem(&self) -> bool {
        matches!(self, StorageMediums::Mem)
    }

    pub fn is_which(&self) -> &str {
        if self.is_json() { "json" } else { "mem" }
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.to_lowercase().as_str() {
            "json" => Ok(StorageMediums::Json),
            "mem" => Ok(StorageMediums::Mem),
            _ => Err(AppError::Validation(
                "Not a recognized storage medium".to_string(),
            )),
        }
    }
}

pub fn parse_storage_type(
    medium: StorageMediums,
    path: &str,
) -> Result<Box<dyn BookStore>, AppError> {
    match medium {
        StorageMediums::Json => Ok(Box::new(stores::JsonStorage::new(path))),
        StorageMediums::Mem => Ok(Box::new(memory::MemStorage::new())),
    }
}

/// Writes the whole address book to `filename`, replacing whatever was there.
pub fn save_data(book: &AddressBook, filename: &str) -> Result<(), AppError> {
    create_file_parent(filename)?;

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(filename)?;

    let data = serde_json::to_string_pretty(book)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;

    log::debug!(target: "storage", "Saved {} contacts to {}", book.len(), filename);
    Ok(())
}

/// Reads an address book from `filename`.
///
/// A missing, unreadable or corrupt file never fails the caller: an empty
/// book is returned instead and the reason is logged.
pub fn load_data(filename: &str) -> AddressBook {
    load_or_empty(&stores::JsonStorage::at(filename), filename)
}

/// Load from any store, falling back to an empty book on failure.
pub fn load_or_empty(storage: &dyn BookStore, source: &str) -> AddressBook {
    match storage.load() {
        Ok(book) => {
            log::debug!(target: "storage", "Loaded {} contacts from {}", book.len(), source);
            book
        }
        Err(AppError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            log::info!(target: "storage", "No address book at {}, starting empty", source);
            AddressBook::new()
        }
        Err(e) => {
            log::warn!(target: "storage", "Could not load {}, starting empty: {}", source, e);
            AddressBook::new()
        }
    }
}

/// Strict reader: every I/O or parse failure is returned.
pub fn read_book(filename: &str) -> Result<AddressBook, AppError> {
    let mut file = OpenOptions::new().read(true).open(filename)?;

    let mut data = String::new();
    file.read_to_string(&mut data)?;

    // serde_json will give an error if data is empty
    if data.trim().is_empty() {
        return Ok(AddressBook::new());
    }

    Ok(serde_json::from_str(&data)?)
}

pub fn create_file_parent(path: &str) -> Result<(), AppError> {
    let path = Path::new(path);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
