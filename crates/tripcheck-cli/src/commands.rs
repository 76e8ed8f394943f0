//! Command handlers

use crate::cli::{Cli, Commands, OutputFormat};
use crate::output::{output_batch, output_cities, output_plan};
use chrono::NaiveDateTime;
use std::path::PathBuf;
use tripcheck_app::app::{self, PlanningOptions, TripRequest};
use tripcheck_app::config::Config;
use tripcheck_app::repository::open_resolver;
use tripcheck_domain::service::hos_engine::MAX_CYCLE_HOURS;
use tripcheck_infra::trips_csv::load_trips_from_csv;
use tripcheck_types::{Error, Result};

const DEPARTURE_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Plan {
            current,
            pickup,
            dropoff,
            cycle_used,
            depart,
            gazetteer,
        } => cmd_plan(
            config, format, current, pickup, dropoff, cycle_used, depart, gazetteer,
        ),

        Commands::Batch {
            csv,
            output,
            gazetteer,
        } => cmd_batch(config, format, csv, output, gazetteer),

        Commands::Cities => cmd_cities(config, format),

        Commands::Config {
            show,
            set_output,
            set_gazetteer,
            clear_gazetteer,
            set_low_hours,
            set_cycle_used,
            reset,
        } => cmd_config(
            show,
            set_output,
            set_gazetteer,
            clear_gazetteer,
            set_low_hours,
            set_cycle_used,
            reset,
        ),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_plan(
    mut config: Config,
    format: OutputFormat,
    current: String,
    pickup: String,
    dropoff: String,
    cycle_used: Option<f64>,
    depart: Option<String>,
    gazetteer: Option<PathBuf>,
) -> Result<()> {
    if gazetteer.is_some() {
        config.gazetteer_path = gazetteer;
    }
    let resolver = open_resolver(&config)?;

    let mut options = PlanningOptions::new().with_low_hours_warning(config.low_hours_warning);
    if let Some(text) = depart {
        options = options.with_departure(parse_departure(&text)?);
    }

    let request = TripRequest::new(
        current,
        pickup,
        dropoff,
        cycle_used.unwrap_or(config.default_cycle_hours_used),
    );
    let plan = app::plan_trip(&request, &resolver, &options)?;

    output_plan(format, &plan, config.low_hours_warning)
}

fn cmd_batch(
    mut config: Config,
    format: OutputFormat,
    csv: PathBuf,
    output: Option<PathBuf>,
    gazetteer: Option<PathBuf>,
) -> Result<()> {
    if !csv.exists() {
        return Err(Error::FileNotFound(csv.display().to_string()));
    }
    if gazetteer.is_some() {
        config.gazetteer_path = gazetteer;
    }
    let resolver = open_resolver(&config)?;

    eprintln!("Loading trips from: {}", csv.display());
    let rows = load_trips_from_csv(&csv)?;
    eprintln!("  {} rows loaded", rows.len());

    let options = PlanningOptions::new().with_low_hours_warning(config.low_hours_warning);
    let report = app::plan_batch(rows, &resolver, &options, config.default_cycle_hours_used);

    if let Some(path) = output {
        let content = serde_json::to_string_pretty(&report)?;
        std::fs::write(&path, content)?;
        eprintln!("Results saved to: {}", path.display());
    }

    output_batch(format, &report)
}

fn cmd_cities(config: Config, format: OutputFormat) -> Result<()> {
    let resolver = open_resolver(&config)?;
    let locations = resolver.known_locations()?;
    output_cities(format, &locations)
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_gazetteer: Option<PathBuf>,
    clear_gazetteer: bool,
    set_low_hours: Option<f64>,
    set_cycle_used: Option<f64>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(path) = set_gazetteer {
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }
        config.gazetteer_path = Some(path);
        modified = true;
    }

    if clear_gazetteer {
        config.gazetteer_path = None;
        modified = true;
    }

    if let Some(hours) = set_low_hours {
        if !hours.is_finite() || hours < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "low hours warning must be a non-negative number, got {}",
                hours
            )));
        }
        config.low_hours_warning = hours;
        modified = true;
    }

    if let Some(hours) = set_cycle_used {
        if !hours.is_finite() || !(0.0..=MAX_CYCLE_HOURS).contains(&hours) {
            return Err(Error::InvalidArgument(format!(
                "cycle hours used must be between 0 and {}, got {}",
                MAX_CYCLE_HOURS, hours
            )));
        }
        config.default_cycle_hours_used = hours;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration saved");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}

fn parse_departure(text: &str) -> Result<NaiveDateTime> {
    DEPARTURE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text.trim(), fmt).ok())
        .ok_or_else(|| {
            Error::InvalidArgument(format!(
                "departure '{}' is not in YYYY-MM-DD HH:MM format",
                text
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_parse_departure_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        assert_eq!(parse_departure("2024-05-01 08:30").unwrap(), expected);
        assert_eq!(parse_departure("2024-05-01T08:30").unwrap(), expected);
        assert_eq!(parse_departure(" 2024-05-01 08:30:00 ").unwrap().minute(), 30);
    }

    #[test]
    fn test_parse_departure_rejects_garbage() {
        let err = parse_departure("next tuesday").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
