//! Dispatch of one input line to its handler

use crate::application::command::{parse_input, Command};
use crate::application::handlers;
use crate::cli::output::usage;
use crate::domain::AddressBook;
use crate::error::Result;
use chrono::NaiveDate;
use std::str::FromStr;
use tracing::{debug, warn};

/// What the session should do after a line was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Deliver the message and keep reading commands
    Continue(String),
    /// Deliver the message and stop
    Exit(String),
}

impl Reply {
    pub fn message(&self) -> &str {
        match self {
            Reply::Continue(message) | Reply::Exit(message) => message,
        }
    }
}

/// Run one line of user input against the book.
/// Failures are turned into their fixed user-facing messages; nothing here is fatal.
pub fn execute(book: &mut AddressBook, line: &str, today: NaiveDate) -> Reply {
    let Some((name, args)) = parse_input(line) else {
        return Reply::Continue(usage().to_string());
    };
    let Ok(command) = Command::from_str(&name) else {
        debug!(command = %name, "unknown command");
        return Reply::Continue(usage().to_string());
    };

    debug!(command = command.name(), args = args.len(), "running command");
    match run(command, book, &args, today) {
        Ok(reply) => reply,
        Err(err) => {
            warn!(command = command.name(), error = %err, "command failed");
            Reply::Continue(err.user_message())
        }
    }
}

fn run(command: Command, book: &mut AddressBook, args: &[&str], today: NaiveDate) -> Result<Reply> {
    let message = match command {
        Command::Exit => return Ok(Reply::Exit("Good bye!".to_string())),
        Command::Hello => handlers::hello(),
        Command::Add => handlers::add_contact(book, args)?,
        Command::Change => handlers::change_contact(book, args)?,
        Command::Phone => handlers::show_phone(book, args)?,
        Command::All => handlers::show_all(book),
        Command::Delete => handlers::delete_contact(book, args)?,
        Command::AddBirthday => handlers::add_birthday(book, args)?,
        Command::ShowBirthday => handlers::show_birthday(book, args)?,
        Command::Birthdays => handlers::birthdays(book, today),
        Command::Help => usage().to_string(),
    };
    Ok(Reply::Continue(message))
}
