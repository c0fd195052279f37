use crate::prelude::{AddressBook, AppError, Birthday, Contact, NaiveDate};

pub const HELP_TEXT: &str = "\
Available commands:
hello                                   - Greet the bot
add <name> <phone>                      - Add a new contact or phone to existing contact
change <name> <old_phone> <new_phone>   - Change existing contact's phone number
phone <name>                            - Show contact's phone numbers
remove-phone <name> <phone>             - Remove a phone number from contact
delete <name>                           - Delete a contact
all                                     - Show all contacts
add-birthday <name> <DD.MM.YYYY>        - Add birthday to contact
show-birthday <name>                    - Show contact's birthday
birthdays                               - Show upcoming birthdays this week
help                                    - Show this help message
exit/close                              - Save and exit the program

Examples:
add John 1234567890
change John 1234567890 0987654321
phone John
add-birthday John 15.03.1990
show-birthday John
birthdays
all";

/// Turn a handler outcome into the line shown to the user.
pub fn reply(result: Result<String, AppError>) -> String {
    match result {
        Ok(message) => message,
        Err(AppError::Validation(msg)) | Err(AppError::MissingArgs(msg)) => {
            format!("Error: {}", msg)
        }
        Err(AppError::NotFound(_)) => "Contact not found.".to_string(),
        Err(e) => format!("Unexpected error: {}", e),
    }
}

fn require_args(args: &[String], count: usize, usage: &str) -> Result<(), AppError> {
    if args.len() < count {
        return Err(AppError::MissingArgs(usage.to_string()));
    }
    Ok(())
}

fn contact_not_found(name: &str) -> AppError {
    AppError::NotFound(format!("Contact '{}'", name))
}

pub fn add_contact(args: &[String], book: &mut AddressBook) -> Result<String, AppError> {
    require_args(
        args,
        2,
        "Please provide both name and phone number. Usage: add <name> <phone>",
    )?;
    let (name, phone) = (&args[0], &args[1]);

    if let Some(contact) = book.find_mut(name) {
        contact.add_phone(phone)?;
        return Ok("Contact updated.".to_string());
    }

    // Validate everything before the contact lands in the book
    let mut contact = Contact::new(name)?;
    contact.add_phone(phone)?;
    book.add_record(contact);

    log::debug!(target: "cli", "Added contact {}", name);
    Ok("Contact added.".to_string())
}

pub fn change_contact(args: &[String], book: &mut AddressBook) -> Result<String, AppError> {
    require_args(
        args,
        3,
        "Please provide name, old phone, and new phone. Usage: change <name> <old_phone> <new_phone>",
    )?;
    let (name, old_phone, new_phone) = (&args[0], &args[1], &args[2]);

    let contact = book.find_mut(name).ok_or_else(|| contact_not_found(name))?;
    contact.edit_phone(old_phone, new_phone)?;

    Ok("Contact updated.".to_string())
}

pub fn show_phone(args: &[String], book: &AddressBook) -> Result<String, AppError> {
    require_args(
        args,
        1,
        "Please provide a contact name. Usage: phone <name>",
    )?;
    let name = &args[0];

    let contact = book.find(name).ok_or_else(|| contact_not_found(name))?;

    if contact.phones.is_empty() {
        return Ok(format!("No phone numbers found for {}", name));
    }

    let phones = contact
        .phones
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<&str>>()
        .join(", ");
    Ok(format!("{}: {}", name, phones))
}

pub fn remove_phone(args: &[String], book: &mut AddressBook) -> Result<String, AppError> {
    require_args(
        args,
        2,
        "Please provide name and phone number. Usage: remove-phone <name> <phone>",
    )?;
    let (name, phone) = (&args[0], &args[1]);

    let contact = book.find_mut(name).ok_or_else(|| contact_not_found(name))?;
    contact.remove_phone(phone)?;

    Ok("Phone removed.".to_string())
}

pub fn delete_contact(args: &[String], book: &mut AddressBook) -> Result<String, AppError> {
    require_args(
        args,
        1,
        "Please provide a contact name. Usage: delete <name>",
    )?;
    let name = &args[0];

    book.delete(name)?;

    log::debug!(target: "cli", "Deleted contact {}", name);
    Ok("Contact deleted.".to_string())
}

pub fn show_all(book: &AddressBook) -> Result<String, AppError> {
    if book.is_empty() {
        return Ok("No contacts saved.".to_string());
    }

    Ok(book
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<String>>()
        .join("\n"))
}

pub fn add_birthday(args: &[String], book: &mut AddressBook) -> Result<String, AppError> {
    require_args(
        args,
        2,
        "Please provide both name and birthday. Usage: add-birthday <name> <DD.MM.YYYY>",
    )?;
    let (name, birthday) = (&args[0], &args[1]);

    let contact = book.find_mut(name).ok_or_else(|| contact_not_found(name))?;
    contact.add_birthday(birthday)?;

    Ok(format!("Birthday added for {}.", name))
}

pub fn show_birthday(args: &[String], book: &AddressBook) -> Result<String, AppError> {
    require_args(
        args,
        1,
        "Please provide a contact name. Usage: show-birthday <name>",
    )?;
    let name = &args[0];

    let contact = book.find(name).ok_or_else(|| contact_not_found(name))?;

    match &contact.birthday {
        Some(birthday) => Ok(format!("{}'s birthday: {}", name, birthday)),
        None => Ok(format!("No birthday found for {}", name)),
    }
}

pub fn birthdays(book: &AddressBook, today: NaiveDate) -> Result<String, AppError> {
    let upcoming = book.upcoming_birthdays(today);

    if upcoming.is_empty() {
        return Ok("No upcoming birthdays in the next week.".to_string());
    }

    let mut lines = vec!["Upcoming birthdays:".to_string()];
    for entry in upcoming {
        lines.push(format!(
            "{}: {}",
            entry.name,
            Birthday::from(entry.congratulation_date)
        ));
    }
    Ok(lines.join("\n"))
}
