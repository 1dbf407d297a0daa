//! Contact record

use crate::domain::fields::{Birthday, Name, Phone};
use crate::error::{AbookError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// One contact: a fixed name, unique phones in insertion order and an optional birthday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredRecord")]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record for `name`
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Record {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Add a phone number.
    /// Returns `Ok(None)` without changing anything if the number is already stored.
    pub fn add_phone(&mut self, number: &str) -> Result<Option<&Phone>> {
        let phone = Phone::new(number)?;
        Ok(self.push_phone(phone))
    }

    fn push_phone(&mut self, phone: Phone) -> Option<&Phone> {
        if self.phones.contains(&phone) {
            debug!(name = %self.name, phone = %phone, "phone already stored");
            return None;
        }
        self.phones.push(phone);
        self.phones.last()
    }

    /// Find a phone by exact digit string
    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.as_str() == number)
    }

    /// Remove a phone, keeping the order of the remaining ones
    pub fn remove_phone(&mut self, number: &str) -> Result<Phone> {
        let index = self
            .phones
            .iter()
            .position(|phone| phone.as_str() == number)
            .ok_or_else(|| AbookError::PhoneNotFound(number.to_string()))?;
        Ok(self.phones.remove(index))
    }

    /// Replace `old_number` with `new_number`.
    /// The new number is appended (unless already present) and the old one removed.
    pub fn edit_phone(&mut self, old_number: &str, new_number: &str) -> Result<()> {
        if self.find_phone(old_number).is_none() {
            return Err(AbookError::PhoneNotFound(old_number.to_string()));
        }
        // Validate before touching the list so a bad number leaves the record as it was
        let new_phone = Phone::new(new_number)?;
        if new_phone.as_str() == old_number {
            return Ok(());
        }

        self.push_phone(new_phone);
        self.remove_phone(old_number)?;
        Ok(())
    }

    /// Set the birthday, replacing any previous value
    pub fn add_birthday(&mut self, date: &str) -> Result<&Birthday> {
        let birthday = Birthday::parse(date)?;
        Ok(&*self.birthday.insert(birthday))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        let birthday = self
            .birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| "None".to_string());
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name,
            phones.join("; "),
            birthday
        )
    }
}

/// On-disk shape of a record; duplicate phones are dropped on load
#[derive(Deserialize)]
struct StoredRecord {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl From<StoredRecord> for Record {
    fn from(stored: StoredRecord) -> Self {
        let mut record = Record {
            name: stored.name,
            phones: Vec::with_capacity(stored.phones.len()),
            birthday: stored.birthday,
        };
        for phone in stored.phones {
            record.push_phone(phone);
        }
        record
    }
}
