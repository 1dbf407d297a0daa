//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "abook")]
#[command(about = "Terminal address book assistant", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Address book data file (default: addressbook.toml)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Reply interface: terminal (1) or web (2). Prompted for when unset
    #[arg(short, long, value_name = "INTERFACE")]
    pub interface: Option<String>,

    /// Config file (default: $ABOOK_CONFIG or ./abook.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
