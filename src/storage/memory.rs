use super::*;
use std::cell::RefCell;

/// Keeps the book for the lifetime of the process only.
pub struct MemStorage {
    pub medium: String,
    data: RefCell<AddressBook>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::with_book(AddressBook::new())
    }

    pub fn with_book(book: AddressBook) -> Self {
        Self {
            medium: "mem".to_string(),
            data: RefCell::new(book),
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl BookStore for MemStorage {
    fn load(&self) -> Result<AddressBook, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, book: &AddressBook) -> Result<(), AppError> {
        *self.data.borrow_mut() = book.clone();
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::Contact;

    #[test]
    fn mem_store_keeps_last_save() -> Result<(), AppError> {
        let storage = MemStorage::new();
        assert!(storage.load()?.is_empty());

        let mut book = AddressBook::new();
        book.add_record(Contact::new("John")?);
        storage.save(&book)?;

        assert_eq!(storage.load()?, book);
        Ok(())
    }
}
