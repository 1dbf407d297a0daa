//! Infrastructure layer - Configuration, persistence and output delivery

pub mod config;
pub mod sink;
pub mod storage;

pub use config::Config;
pub use sink::{Interface, OutputSink, TerminalOutput, WebOutput};
pub use storage::{BookStore, FileStore};
