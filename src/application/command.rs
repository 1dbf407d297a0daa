//! Command names and input tokenizing

use crate::error::{AbookError, Result};
use std::str::FromStr;

/// Commands understood by the assistant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    Delete,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Help,
    Exit,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::All => "all",
            Command::Delete => "delete",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }

    /// Take the first `N` positional arguments; extra ones are ignored
    pub fn take_args<'a, const N: usize>(&self, args: &[&'a str]) -> Result<[&'a str; N]> {
        if args.len() < N {
            return Err(AbookError::ArgumentCount {
                command: self.name().to_string(),
                expected: N,
            });
        }
        let mut taken = [""; N];
        taken.copy_from_slice(&args[..N]);
        Ok(taken)
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "all" => Ok(Command::All),
            "delete" => Ok(Command::Delete),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "help" => Ok(Command::Help),
            "close" | "exit" => Ok(Command::Exit),
            _ => Err(format!("Unknown command: '{}'", s)),
        }
    }
}

/// Split a line into its lowercased command word and the remaining arguments.
/// Returns `None` for blank input.
pub fn parse_input(line: &str) -> Option<(String, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    Some((command, tokens.collect()))
}
