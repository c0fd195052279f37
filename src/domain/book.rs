use super::*;

use chrono::{Datelike, Days, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of days ahead (inclusive) that `upcoming_birthdays` looks at.
pub const UPCOMING_WINDOW_DAYS: u64 = 7;

/// Contacts keyed by their unique name.
///
/// A `BTreeMap` keeps listings in a stable, name-sorted order between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, Contact>",
    into = "BTreeMap<String, Contact>"
)]
pub struct AddressBook {
    data: BTreeMap<String, Contact>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub congratulation_date: NaiveDate,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&mut self, contact: Contact) {
        self.data.insert(contact.name.clone(), contact);
    }

    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.data.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.data.get_mut(name)
    }

    pub fn delete(&mut self, name: &str) -> Result<Contact, AppError> {
        self.data
            .remove(name)
            .ok_or_else(|| AppError::NotFound(format!("Contact '{}'", name)))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.data.values()
    }

    /// Contacts whose birthday falls within the next week, counting `today`.
    ///
    /// A birthday already past this year rolls over to next year. When the
    /// occurrence lands on a weekend the congratulation moves to Monday.
    /// Results are ordered by congratulation date, then by name.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let Some(window_end) = today.checked_add_days(Days::new(UPCOMING_WINDOW_DAYS)) else {
            return Vec::new();
        };

        let mut upcoming: Vec<UpcomingBirthday> = self
            .iter()
            .filter_map(|contact| {
                let birthday = contact.birthday?.date();

                let mut occurrence = occurrence_in_year(birthday, today.year())?;
                if occurrence < today {
                    occurrence = occurrence_in_year(birthday, today.year() + 1)?;
                }

                if occurrence > window_end {
                    return None;
                }

                Some(UpcomingBirthday {
                    name: contact.name.clone(),
                    congratulation_date: shift_weekend_to_monday(occurrence)?,
                })
            })
            .collect();

        upcoming.sort_by(|a, b| {
            a.congratulation_date
                .cmp(&b.congratulation_date)
                .then_with(|| a.name.cmp(&b.name))
        });
        upcoming
    }
}

// Stored books must keep every contact reachable under its own, valid name
impl TryFrom<BTreeMap<String, Contact>> for AddressBook {
    type Error = AppError;

    fn try_from(data: BTreeMap<String, Contact>) -> Result<Self, Self::Error> {
        for (key, contact) in &data {
            if !validate_name(&contact.name) || contact.name != contact.name.trim() {
                return Err(AppError::Validation(format!(
                    "Stored contact under '{}' has an invalid name",
                    key
                )));
            }

            if *key != contact.name {
                return Err(AppError::Validation(format!(
                    "Stored contact under '{}' is named '{}'",
                    key, contact.name
                )));
            }
        }

        Ok(Self { data })
    }
}

impl From<AddressBook> for BTreeMap<String, Contact> {
    fn from(book: AddressBook) -> Self {
        book.data
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Contact;
    type IntoIter = std::collections::btree_map::Values<'a, String, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.values()
    }
}

// 29 February falls back to 28 February in non-leap years
fn occurrence_in_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

fn shift_weekend_to_monday(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => date.checked_add_days(Days::new(2)),
        Weekday::Sun => date.checked_add_days(Days::new(1)),
        _ => Some(date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn contact_with_birthday(name: &str, birthday: &str) -> Result<Contact, AppError> {
        let mut contact = Contact::new(name)?;
        contact.add_birthday(birthday)?;
        Ok(contact)
    }

    #[test]
    fn add_find_and_delete() -> Result<(), AppError> {
        let mut book = AddressBook::new();
        let mut john = Contact::new("John")?;
        john.add_phone("1234567890")?;
        book.add_record(john);
        book.add_record(Contact::new("Jane")?);

        assert_eq!(book.len(), 2);
        assert!(book.find("John").is_some());
        assert!(book.find("john").is_none()); // Names are exact keys

        book.find_mut("Jane")
            .ok_or_else(|| AppError::NotFound("Jane".to_string()))?
            .add_phone("9876543210")?;
        assert_eq!(book.find("Jane").unwrap().phones.len(), 1);

        book.delete("John")?;
        assert!(book.find("John").is_none());
        assert!(matches!(book.delete("John"), Err(AppError::NotFound(_))));
        Ok(())
    }

    #[test]
    fn add_record_replaces_same_name() -> Result<(), AppError> {
        let mut book = AddressBook::new();
        let mut first = Contact::new("John")?;
        first.add_phone("1234567890")?;
        book.add_record(first);
        book.add_record(Contact::new("John")?);

        assert_eq!(book.len(), 1);
        assert!(book.find("John").unwrap().phones.is_empty());
        Ok(())
    }

    #[test]
    fn stored_names_must_match_their_keys() {
        let mismatched = r#"{
            "A": {"name": "X", "phones": [], "birthday": null},
            "B": {"name": "X", "phones": [], "birthday": null}
        }"#;
        assert!(serde_json::from_str::<AddressBook>(mismatched).is_err());

        let blank = r#"{"  ": {"name": "  ", "phones": [], "birthday": null}}"#;
        assert!(serde_json::from_str::<AddressBook>(blank).is_err());

        let padded = r#"{" X": {"name": " X", "phones": [], "birthday": null}}"#;
        assert!(serde_json::from_str::<AddressBook>(padded).is_err());
    }

    #[test]
    fn serialized_book_reads_back() -> Result<(), AppError> {
        let mut book = AddressBook::new();
        let mut john = Contact::new("John")?;
        john.add_phone("1234567890")?;
        book.add_record(john);

        let data = serde_json::to_string(&book)?;
        assert!(data.starts_with(r#"{"John":"#));
        assert_eq!(serde_json::from_str::<AddressBook>(&data)?, book);
        Ok(())
    }

    #[test]
    fn iterates_in_name_order() -> Result<(), AppError> {
        let mut book = AddressBook::new();
        for name in ["Zoe", "Adam", "Mike"] {
            book.add_record(Contact::new(name)?);
        }

        let names: Vec<&str> = book.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Adam", "Mike", "Zoe"]);
        Ok(())
    }

    #[test]
    fn upcoming_birthdays_within_week() -> Result<(), AppError> {
        // 2024-01-22 is a Monday
        let today = date(2024, 1, 22);
        let mut book = AddressBook::new();
        book.add_record(contact_with_birthday("Today", "22.01.1990")?);
        book.add_record(contact_with_birthday("Wednesday", "24.01.1985")?);
        book.add_record(contact_with_birthday("LastDay", "29.01.2000")?);
        book.add_record(contact_with_birthday("TooLate", "30.01.2000")?);
        book.add_record(contact_with_birthday("Passed", "21.01.1990")?);
        book.add_record(Contact::new("NoBirthday")?);

        let upcoming = book.upcoming_birthdays(today);

        assert_eq!(
            upcoming,
            vec![
                UpcomingBirthday {
                    name: "Today".to_string(),
                    congratulation_date: date(2024, 1, 22),
                },
                UpcomingBirthday {
                    name: "Wednesday".to_string(),
                    congratulation_date: date(2024, 1, 24),
                },
                UpcomingBirthday {
                    name: "LastDay".to_string(),
                    congratulation_date: date(2024, 1, 29),
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn weekend_birthdays_move_to_monday() -> Result<(), AppError> {
        // 2024-01-24 is a Wednesday; 27th Saturday, 28th Sunday
        let today = date(2024, 1, 24);
        let mut book = AddressBook::new();
        book.add_record(contact_with_birthday("Saturday", "27.01.1990")?);
        book.add_record(contact_with_birthday("Sunday", "28.01.1990")?);

        let upcoming = book.upcoming_birthdays(today);

        assert_eq!(upcoming.len(), 2);
        assert!(upcoming
            .iter()
            .all(|u| u.congratulation_date == date(2024, 1, 29)));
        assert_eq!(upcoming[0].name, "Saturday");
        Ok(())
    }

    #[test]
    fn birthdays_wrap_into_next_year() -> Result<(), AppError> {
        // 2024-12-30 is a Monday
        let today = date(2024, 12, 30);
        let mut book = AddressBook::new();
        book.add_record(contact_with_birthday("NewYear", "02.01.1990")?);

        let upcoming = book.upcoming_birthdays(today);

        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].congratulation_date, date(2025, 1, 2));
        Ok(())
    }

    #[test]
    fn leap_day_birthday_in_common_year() -> Result<(), AppError> {
        // 2023-02-28 is a Tuesday
        let today = date(2023, 2, 25);
        let mut book = AddressBook::new();
        book.add_record(contact_with_birthday("Leap", "29.02.2000")?);

        let upcoming = book.upcoming_birthdays(today);

        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].congratulation_date, date(2023, 2, 28));
        Ok(())
    }
}
