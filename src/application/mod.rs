//! Application layer - Command handling and the interactive session

pub mod command;
pub mod dispatch;
pub mod handlers;
pub mod session;

pub use command::{parse_input, Command};
pub use dispatch::{execute, Reply};
pub use session::{choose_interface, Session};
