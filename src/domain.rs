pub mod book;
pub mod contact;

use crate::errors::AppError;
use crate::validation::{validate_name, validate_phone};
use chrono::NaiveDate;

pub use book::{AddressBook, UpcomingBirthday};
pub use contact::{Birthday, Contact, Phone};
