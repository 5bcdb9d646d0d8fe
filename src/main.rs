#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! swiftshark — fetch product records from DynamoDB by category.

mod cli;
mod commands;
mod config;
mod logging;
mod product;
mod source;
mod types;

use clap::Parser;
use tracing::error;

use cli::{Cli, write_error};
use product::ProductError;
use types::ErrorOutput;

fn main() {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        error!("Error fetching products: {err}");
        if cli.command.output_format().is_json() {
            write_error(&ErrorOutput::from_product_error(&err));
        }
        std::process::exit(err.exit_code());
    }
}

/// One request-response cycle on a single-threaded runtime.
fn run(cli: &Cli) -> Result<(), ProductError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(commands::dispatch(&cli.command))
}
