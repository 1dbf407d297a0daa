//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::Cli;
pub use output::{format_contact_list, format_phones, format_upcoming_birthdays, usage};
