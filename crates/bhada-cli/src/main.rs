//! Bhada Meter - taxi fare estimation for independent cab operators
//!
//! A CLI tool that prices trips against Indian taxi-tariff rules:
//! minimum-distance floors, heavy-vehicle packages, driver allowances,
//! interstate permits, and GST.

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
