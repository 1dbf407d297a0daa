//! Output formatting utilities

use crate::domain::{AddressBook, Record, UpcomingBirthday};

/// Format every contact, one per line
pub fn format_contact_list(book: &AddressBook) -> String {
    if book.is_empty() {
        return "There are no contacts.".to_string();
    }

    let mut output = String::new();
    for record in book.records() {
        output.push_str(&format!("{}\n", record));
    }
    output
}

/// Format the phones of a single contact
pub fn format_phones(record: &Record) -> String {
    if record.phones().is_empty() {
        return "No phone numbers".to_string();
    }

    record
        .phones()
        .iter()
        .map(|phone| phone.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Format upcoming birthdays as `name: DD.MM.YYYY` lines.
/// Returns an empty string when nobody is upcoming.
pub fn format_upcoming_birthdays(upcoming: &[UpcomingBirthday]) -> String {
    let mut output = String::new();
    for entry in upcoming {
        output.push_str(&format!("{}\n", entry));
    }
    output
}

/// Usage text listing every command
pub fn usage() -> &'static str {
    "Usage: 'hello'\n\
     'close'\n\
     'exit'\n\
     'all'\n\
     'add name phone_number'\n\
     'change name old_phone new_phone'\n\
     'phone name'\n\
     'delete name'\n\
     'add-birthday name birthday(dd.mm.yyyy)'\n\
     'show-birthday name'\n\
     'birthdays'\n\
     'help'"
}
