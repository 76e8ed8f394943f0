//! Tripcheck - trip planning with hours-of-service checks
//!
//! A CLI tool that plans a current -> pickup -> dropoff trip, slices the
//! driving into legal segments with rest periods and checks the result
//! against the 70-hour / 8-day cycle.

mod cli;
mod commands;
mod logging;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
