use super::*;

pub struct JsonStorage {
    pub medium: String,
    pub path: String,
}

impl JsonStorage {
    pub fn new(path: &str) -> Self {
        Self {
            medium: "json".to_string(),
            path: if path.is_empty() {
                DEFAULT_STORAGE_PATH.to_string()
            } else {
                path.to_string()
            },
        }
    }

    /// Storage at exactly `path`, with no default substitution.
    pub fn at(path: &str) -> Self {
        Self {
            medium: "json".to_string(),
            path: path.to_string(),
        }
    }
}

impl BookStore for JsonStorage {
    fn load(&self) -> Result<AddressBook, AppError> {
        read_book(&self.path)
    }

    fn save(&self, book: &AddressBook) -> Result<(), AppError> {
        save_data(book, &self.path)
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
