//! Command handlers

use crate::application::command::Command;
use crate::cli::output::{format_contact_list, format_phones, format_upcoming_birthdays};
use crate::domain::{AddressBook, Phone, Record};
use crate::error::{AbookError, Result};
use chrono::NaiveDate;

pub fn hello() -> String {
    "How can I help you?".to_string()
}

/// Add a contact with a phone, or add the phone to an existing contact
pub fn add_contact(book: &mut AddressBook, args: &[&str]) -> Result<String> {
    let [name, number] = Command::Add.take_args::<2>(args)?;
    // Reject a bad number before a new contact is created
    let phone = Phone::new(number)?;

    let message = if book.find(name).is_some() {
        "Contact updated."
    } else {
        book.add_record(Record::new(name)?);
        "Contact added."
    };
    contact_mut(book, name)?.add_phone(phone.as_str())?;
    Ok(message.to_string())
}

pub fn change_contact(book: &mut AddressBook, args: &[&str]) -> Result<String> {
    let [name, old_number, new_number] = Command::Change.take_args::<3>(args)?;
    contact_mut(book, name)?.edit_phone(old_number, new_number)?;
    Ok("Number changed".to_string())
}

pub fn show_phone(book: &AddressBook, args: &[&str]) -> Result<String> {
    let [name] = Command::Phone.take_args::<1>(args)?;
    Ok(format_phones(contact(book, name)?))
}

pub fn show_all(book: &AddressBook) -> String {
    format_contact_list(book)
}

pub fn delete_contact(book: &mut AddressBook, args: &[&str]) -> Result<String> {
    let [name] = Command::Delete.take_args::<1>(args)?;
    book.delete(name)?;
    Ok("Contact deleted".to_string())
}

pub fn add_birthday(book: &mut AddressBook, args: &[&str]) -> Result<String> {
    let [name, date] = Command::AddBirthday.take_args::<2>(args)?;
    let record = contact_mut(book, name)?;
    let message = if record.birthday().is_some() {
        "Birthday updated"
    } else {
        "Birthday added"
    };
    record.add_birthday(date)?;
    Ok(message.to_string())
}

pub fn show_birthday(book: &AddressBook, args: &[&str]) -> Result<String> {
    let [name] = Command::ShowBirthday.take_args::<1>(args)?;
    Ok(contact(book, name)?
        .birthday()
        .map(|birthday| birthday.to_string())
        .unwrap_or_else(|| "Birthday absent".to_string()))
}

pub fn birthdays(book: &AddressBook, today: NaiveDate) -> String {
    let output = format_upcoming_birthdays(&book.upcoming_birthdays(today));
    if output.is_empty() {
        return "There are no upcoming birthdays.".to_string();
    }
    output
}

fn contact<'a>(book: &'a AddressBook, name: &str) -> Result<&'a Record> {
    book.find(name)
        .ok_or_else(|| AbookError::ContactNotFound(name.to_string()))
}

fn contact_mut<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| AbookError::ContactNotFound(name.to_string()))
}
