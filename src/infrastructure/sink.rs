//! Output sinks for delivering replies to the user

use crate::error::Result;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// Where replies are delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interface {
    /// Print replies directly
    Terminal,
    /// Simulated delivery to a web client
    Web,
}

impl Interface {
    /// Build the sink for this interface on top of `writer`
    pub fn sink<'a, W: Write + 'a>(self, writer: W) -> Box<dyn OutputSink + 'a> {
        match self {
            Interface::Terminal => Box::new(TerminalOutput::new(writer)),
            Interface::Web => Box::new(WebOutput::new(writer)),
        }
    }
}

impl FromStr for Interface {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "terminal" => Ok(Interface::Terminal),
            "2" | "web" => Ok(Interface::Web),
            _ => Err(format!(
                "Invalid interface: '{}'. Valid interfaces are: terminal (1), web (2)",
                s.trim()
            )),
        }
    }
}

/// Capability to deliver a text message to the user
pub trait OutputSink {
    fn send_to_user(&mut self, message: &str) -> Result<()>;
}

/// Writes messages as they are
pub struct TerminalOutput<W: Write> {
    writer: W,
}

impl<W: Write> TerminalOutput<W> {
    pub fn new(writer: W) -> Self {
        TerminalOutput { writer }
    }
}

impl<W: Write> OutputSink for TerminalOutput<W> {
    fn send_to_user(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "{}", message)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Stands in for delivery to a web client
pub struct WebOutput<W: Write> {
    writer: W,
}

impl<W: Write> WebOutput<W> {
    pub fn new(writer: W) -> Self {
        WebOutput { writer }
    }
}

impl<W: Write> OutputSink for WebOutput<W> {
    fn send_to_user(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "*'{}' was sent to user in web*", message)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_interface() {
        assert_eq!(Interface::from_str("1").unwrap(), Interface::Terminal);
        assert_eq!(Interface::from_str("terminal").unwrap(), Interface::Terminal);
        assert_eq!(Interface::from_str("2").unwrap(), Interface::Web);
        assert_eq!(Interface::from_str(" WEB ").unwrap(), Interface::Web);
        assert!(Interface::from_str("3").is_err());
        assert!(Interface::from_str("").is_err());
    }

    #[test]
    fn test_terminal_output() {
        let mut buffer = Vec::new();
        TerminalOutput::new(&mut buffer)
            .send_to_user("Contact added.")
            .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "Contact added.\n");
    }

    #[test]
    fn test_web_output() {
        let mut buffer = Vec::new();
        WebOutput::new(&mut buffer)
            .send_to_user("Contact added.")
            .unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "*'Contact added.' was sent to user in web*\n"
        );
    }

    #[test]
    fn test_interface_builds_matching_sink() {
        let mut buffer = Vec::new();
        {
            let mut sink = Interface::Web.sink(&mut buffer);
            sink.send_to_user("Good bye!").unwrap();
        }
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "*'Good bye!' was sent to user in web*\n"
        );
    }
}
