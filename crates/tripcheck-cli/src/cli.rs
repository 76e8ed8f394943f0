//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;
pub use tripcheck_types::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "tripcheck")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Trip planning with 70-hour / 8-day hours-of-service checks")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Plan a trip and check it against the 70-hour cycle
    Plan {
        /// Current location (city name or "lat,lng")
        current: String,

        /// Pickup location
        pickup: String,

        /// Dropoff location
        dropoff: String,

        /// Hours already used in the current 8-day cycle (0-70).
        /// Uses config value if not specified.
        #[arg(long, short = 'c', allow_negative_numbers = true)]
        cycle_used: Option<f64>,

        /// Departure time for the clock timeline (e.g., "2024-05-01 08:00")
        #[arg(long, short = 'd')]
        depart: Option<String>,

        /// Gazetteer file (CSV or TOML) overriding the configured one
        #[arg(long, short = 'g')]
        gazetteer: Option<PathBuf>,
    },

    /// Plan every trip in a CSV file (current,pickup,dropoff,[cycle_hours_used])
    Batch {
        /// Path to the trips CSV
        csv: PathBuf,

        /// Write JSON results to this file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Gazetteer file (CSV or TOML) overriding the configured one
        #[arg(long, short = 'g')]
        gazetteer: Option<PathBuf>,
    },

    /// List known locations
    Cities,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set gazetteer file (CSV or TOML)
        #[arg(long)]
        set_gazetteer: Option<PathBuf>,

        /// Stop using a gazetteer file
        #[arg(long)]
        clear_gazetteer: bool,

        /// Set the low-hours warning threshold
        #[arg(long)]
        set_low_hours: Option<f64>,

        /// Set default cycle hours used (0-70)
        #[arg(long)]
        set_cycle_used: Option<f64>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
