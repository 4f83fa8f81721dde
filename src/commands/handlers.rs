//! One handler per command.
//!
//! Each handler receives its arguments and the address book explicitly and
//! returns either the reply text or a [`CommandError`].

use crate::domain::ContactName;
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use chrono::NaiveDate;

/// Check that exactly `N` arguments were given.
fn expect_args<'a, const N: usize>(
    command: &'static str,
    args: &'a [String],
) -> CommandResult<[&'a str; N]> {
    if args.len() != N {
        return Err(CommandError::Arity {
            command,
            expected: N,
            got: args.len(),
        });
    }
    Ok(std::array::from_fn(|i| args[i].as_str()))
}

fn find_mut<'a>(book: &'a mut AddressBook, name: &str) -> CommandResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))
}

fn find<'a>(book: &'a AddressBook, name: &str) -> CommandResult<&'a Record> {
    book.find(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))
}

pub fn hello() -> String {
    "How can I help you?".to_string()
}

/// `add <name> <phone>`: store a new record, replacing any existing one.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = expect_args::<2>("add", args)?;

    let mut record = Record::new(ContactName::new(name.to_lowercase())?);
    record.add_phone(phone)?;
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change <name> <new_phone>`: replace the contact's first phone.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, new_phone] = expect_args::<2>("change", args)?;
    let name = name.to_lowercase();

    let record = find_mut(book, &name)?;
    let old_phone = record
        .primary_phone()
        .map(|p| p.as_str().to_string())
        .ok_or_else(|| CommandError::Malformed(format!("{} has no phone to change", name)))?;
    record.edit_phone(&old_phone, new_phone)?;
    Ok("Contact updated.".to_string())
}

/// `phone <name>`: show the contact's first phone.
pub fn show_phone(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let [name] = expect_args::<1>("phone", args)?;
    let name = name.to_lowercase();

    find(book, &name)?
        .primary_phone()
        .map(|p| p.to_string())
        .ok_or_else(|| CommandError::Malformed(format!("{} has no phones", name)))
}

/// `all`: every record, one per line.
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts saved.".to_string();
    }
    book.iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, birthday] = expect_args::<2>("add-birthday", args)?;

    find_mut(book, &name.to_lowercase())?.set_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let [name] = expect_args::<1>("show-birthday", args)?;
    let name = name.to_lowercase();

    let record = find(book, &name)?;
    record
        .birthday()
        .map(|b| b.to_string())
        .ok_or(CommandError::NotFound(name))
}

/// `birthdays`: greeting dates for every contact with a birthday.
pub fn birthdays(book: &AddressBook, today: NaiveDate) -> String {
    let upcoming = book.upcoming_birthdays(today);
    if upcoming.is_empty() {
        return "No upcoming birthdays.".to_string();
    }

    let mut lines = vec!["Upcoming birthdays:".to_string()];
    lines.extend(upcoming.iter().map(|u| u.to_string()));
    lines.join("\n")
}
