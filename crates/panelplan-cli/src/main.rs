//! panelplan - cargo loading-plan calculator for composite panel
//! shipments
//!
//! A CLI tool that distributes panel types over shipping pallets and
//! checks the result against a vehicle's volume and payload capacity.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
