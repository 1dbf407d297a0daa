//! Address book aggregate

use crate::domain::birthdays::{upcoming_birthdays, UpcomingBirthday};
use crate::domain::Record;
use crate::error::{AbookError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// All contacts, keyed by name and kept in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredBook")]
pub struct AddressBook {
    #[serde(rename = "contacts")]
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        AddressBook::default()
    }

    /// Insert a record, replacing (in place) any record with the same name
    pub fn add_record(&mut self, record: Record) -> &Record {
        let index = match self.position(record.name().as_str()) {
            Some(index) => {
                self.records[index] = record;
                index
            }
            None => {
                self.records.push(record);
                self.records.len() - 1
            }
        };
        &self.records[index]
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Remove the record for `name`
    pub fn delete(&mut self, name: &str) -> Result<Record> {
        let index = self
            .position(name)
            .ok_or_else(|| AbookError::ContactNotFound(name.to_string()))?;
        Ok(self.records.remove(index))
    }

    /// Records in insertion order
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts to greet in the week starting at `today`
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        upcoming_birthdays(&self.records, today)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

/// On-disk shape of the book; later duplicates of a name win, as with `add_record`
#[derive(Deserialize)]
struct StoredBook {
    #[serde(default)]
    contacts: Vec<Record>,
}

impl From<StoredBook> for AddressBook {
    fn from(stored: StoredBook) -> Self {
        let mut book = AddressBook::new();
        for record in stored.contacts {
            book.add_record(record);
        }
        book
    }
}
