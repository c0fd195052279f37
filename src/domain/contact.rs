use std::fmt;

use super::*;
pub use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(NaiveDate);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,

    #[serde(default)]
    pub phones: Vec<Phone>,

    #[serde(default)]
    pub birthday: Option<Birthday>,
}

pub enum ValidationReq {
    __,
}

impl ValidationReq {
    pub fn name_req() -> String {
        "Contact name must not be empty".to_string()
    }

    pub fn phone_req() -> String {
        "Phone number must contain exactly 10 digits".to_string()
    }

    pub fn birthday_req() -> String {
        "Invalid date format. Use DD.MM.YYYY".to_string()
    }
}

impl Phone {
    pub fn new(value: &str) -> Result<Self, AppError> {
        if !validate_phone(value)? {
            return Err(AppError::Validation(ValidationReq::phone_req()));
        }
        Ok(Phone(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Phone {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Phone::new(&value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Birthday {
    pub fn parse(value: &str) -> Result<Self, AppError> {
        NaiveDate::parse_from_str(value.trim(), BIRTHDAY_FORMAT)
            .map(Birthday)
            .map_err(|_| AppError::Validation(ValidationReq::birthday_req()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Birthday(date)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl Contact {
    pub fn new(name: &str) -> Result<Self, AppError> {
        if !validate_name(name) {
            return Err(AppError::Validation(ValidationReq::name_req()));
        }

        Ok(Contact {
            name: name.trim().to_string(),
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn add_phone(&mut self, phone: &str) -> Result<(), AppError> {
        let phone = Phone::new(phone)?;

        if self.phones.contains(&phone) {
            return Err(AppError::Validation(format!(
                "Phone {} already exists for {}",
                phone, self.name
            )));
        }

        self.phones.push(phone);
        Ok(())
    }

    pub fn remove_phone(&mut self, phone: &str) -> Result<(), AppError> {
        match self.phones.iter().position(|p| p.as_str() == phone) {
            Some(index) => {
                self.phones.remove(index);
                Ok(())
            }
            None => Err(AppError::Validation(format!(
                "Phone {} not found in record",
                phone
            ))),
        }
    }

    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> Result<(), AppError> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == old_phone)
            .ok_or_else(|| {
                AppError::Validation(format!("Phone {} not found in record", old_phone))
            })?;

        let new_phone = Phone::new(new_phone)?;

        if old_phone != new_phone.as_str() && self.phones.contains(&new_phone) {
            return Err(AppError::Validation(format!(
                "Phone {} already exists for {}",
                new_phone, self.name
            )));
        }

        self.phones[index] = new_phone;
        Ok(())
    }

    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    pub fn add_birthday(&mut self, birthday: &str) -> Result<(), AppError> {
        self.birthday = Some(Birthday::parse(birthday)?);
        Ok(())
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<&str>>()
            .join("; ");

        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;

        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
