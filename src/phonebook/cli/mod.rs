//! # CLI Layer
//!
//! One possible client of the phonebook library, and the only place that:
//! - Parses command-line arguments
//! - Touches stdin, stdout and stderr
//! - Installs the log subscriber
//!
//! ## Structure
//!
//! - [`setup`]: clap argument definitions
//! - [`session`]: the menu loop
//! - [`prompt`]: reading answers from the console
//! - [`render`]: the paged table and search result lines
//! - [`print`]: colored command messages

mod print;
mod prompt;
mod render;
mod session;
mod setup;

use clap::Parser;
use phonebook::api::PhonebookApi;
use phonebook::error::Result;
use phonebook::store::csv_file::CsvStore;
use prompt::Console;
use session::Session;
use setup::Cli;
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config();
    config.validate()?;
    debug!(file = %config.data_file.display(), page_size = config.page_size, "starting");

    let store = CsvStore::new(config.data_file.clone());
    let api = PhonebookApi::open(store, config.page_size)?;

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    Session::new(api, console).run()
}

fn init_logging(verbose: bool) {
    // RUST_LOG wins; otherwise warnings only, debug with --verbose
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("phonebook={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
