pub use crate::cli::{command, handlers, run_app, run_session};
pub use crate::domain::{
    book::{self, AddressBook, UpcomingBirthday},
    contact::{self, Birthday, Contact, NaiveDate, Phone},
};
pub use crate::errors::AppError;
pub use crate::storage::{self, BookStore, StorageMediums, load_data, save_data};
