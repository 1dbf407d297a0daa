//! abook - Terminal address book assistant
//!
//! A line-oriented assistant that stores contact names, phone numbers and
//! birthdays, and reports whose birthday falls within the next week.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::{AbookError, ValidationError};
