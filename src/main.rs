use abook::application::{choose_interface, Session};
use abook::cli::Cli;
use abook::error::{AbookError, Result};
use abook::infrastructure::{BookStore, Config, FileStore, Interface};
use clap::Parser;
use std::io::{self, Write};
use std::str::FromStr;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(verbose: bool) {
    // Logs go to stderr; stdout is the conversation with the user
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("abook=debug")
        } else {
            EnvFilter::new("abook=warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::discover(cli.config.as_deref())?;
    if let Some(file) = cli.file {
        config.data_file = file;
    }
    if let Some(interface) = cli.interface.as_deref() {
        config.interface = Some(Interface::from_str(interface).map_err(AbookError::Config)?);
    }

    let store = FileStore::new(config.data_file.clone());
    let mut book = store.load()?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    writeln!(stdout, "Welcome to the assistant bot!")?;

    let interface = match config.interface {
        Some(interface) => interface,
        None => choose_interface(&mut input, &mut stdout)?,
    };

    {
        let mut session = Session::new(&mut book, interface.sink(io::stdout()));
        session.run(&mut input, &mut stdout)?;
    }

    store.save(&book)?;
    info!(path = %store.path().display(), contacts = book.len(), "address book saved");
    Ok(())
}
