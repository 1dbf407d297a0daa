//! Domain layer - Contact model and birthday rules

pub mod address_book;
pub mod birthdays;
pub mod fields;
pub mod record;

pub use address_book::AddressBook;
pub use birthdays::{greeting_date, upcoming_birthdays, UpcomingBirthday};
pub use fields::{Birthday, Name, Phone};
pub use record::Record;
