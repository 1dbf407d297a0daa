//! Interactive command loop

use crate::application::dispatch::{execute, Reply};
use crate::domain::AddressBook;
use crate::error::{AbookError, Result};
use crate::infrastructure::{Interface, OutputSink};
use chrono::{Local, NaiveDate};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info};

const INTERFACE_PROMPT: &str = "Choose interface: 1 = terminal, 2 = web: ";
const COMMAND_PROMPT: &str = "Enter a command: ";

/// Ask for the reply interface until a valid answer is given
pub fn choose_interface<R: BufRead, W: Write>(input: &mut R, prompt: &mut W) -> Result<Interface> {
    loop {
        write!(prompt, "{}", INTERFACE_PROMPT)?;
        prompt.flush()?;

        let line = read_line(input)?.ok_or_else(|| {
            AbookError::Config("Input closed before an interface was chosen".to_string())
        })?;

        match Interface::from_str(&line) {
            Ok(interface) => {
                info!(?interface, "interface chosen");
                return Ok(interface);
            }
            Err(_) => writeln!(prompt, "Incorrect data")?,
        }
    }
}

/// Reads commands, applies them to the book and delivers replies to the sink
pub struct Session<'a> {
    book: &'a mut AddressBook,
    sink: Box<dyn OutputSink + 'a>,
    clock: Box<dyn Fn() -> NaiveDate + 'a>,
}

impl<'a> Session<'a> {
    pub fn new(book: &'a mut AddressBook, sink: Box<dyn OutputSink + 'a>) -> Self {
        Session {
            book,
            sink,
            clock: Box::new(|| Local::now().date_naive()),
        }
    }

    /// Use `clock` instead of the local date as "today"
    pub fn with_clock(mut self, clock: impl Fn() -> NaiveDate + 'a) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Run until `exit`/`close` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut prompt: W) -> Result<()> {
        loop {
            write!(prompt, "{}", COMMAND_PROMPT)?;
            prompt.flush()?;

            let Some(line) = read_line(&mut input)? else {
                debug!("input closed");
                return Ok(());
            };

            match execute(self.book, &line, (self.clock)()) {
                Reply::Continue(message) => self.sink.send_to_user(&message)?,
                Reply::Exit(message) => {
                    self.sink.send_to_user(&message)?;
                    return Ok(());
                }
            }
        }
    }
}

/// Read one line without its terminator; `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
