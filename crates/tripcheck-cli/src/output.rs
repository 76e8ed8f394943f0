//! Output formatting module

use tripcheck_app::app::{BatchReport, TripPlan};
use tripcheck_domain::model::Waypoint;
use tripcheck_domain::service::{format_hours, generate_trip_report};
use tripcheck_types::OutputFormat;
use tripcheck_types::Result;

pub fn output_plan(
    output_format: OutputFormat,
    plan: &TripPlan,
    low_hours_warning: f64,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(plan)?;
        println!("{}", content);
        return Ok(());
    }

    print!("{}", generate_trip_report(&plan.result, low_hours_warning));
    println!("Cycle available: {:.1}% ({})", plan.cycle_available_percent, plan.status.label());

    if let Some(timeline) = &plan.timeline {
        println!("\n[Timeline]");
        for entry in timeline {
            println!(
                "  {} - {}  {:<10} {}",
                entry.start.format("%m/%d %H:%M"),
                entry.end.format("%m/%d %H:%M"),
                entry.kind.label(),
                entry.activity
            );
        }
    }

    if !plan.daily_summary.is_empty() {
        println!("\n[Daily Summary]");
        println!(
            "  {:<12} {:>9} {:>9} {:>9}",
            "Date", "Driving", "On duty", "Rest"
        );
        for day in &plan.daily_summary {
            println!(
                "  {:<12} {:>9} {:>9} {:>9}",
                day.date.format("%Y-%m-%d").to_string(),
                format_hours(day.driving_hours),
                format_hours(day.on_duty_hours),
                format_hours(day.rest_hours)
            );
        }
    }

    Ok(())
}

pub fn output_batch(output_format: OutputFormat, report: &BatchReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(report)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nBatch Results");
    println!("=============");
    println!(
        "{:>4}  {:<40} {:>9} {:>10}  Status",
        "Row", "Route", "Miles", "Remaining"
    );
    for outcome in &report.outcomes {
        match (&outcome.plan, &outcome.error) {
            (Some(plan), _) => {
                let route = format!(
                    "{} -> {} -> {}",
                    plan.request.current_location,
                    plan.request.pickup_location,
                    plan.request.dropoff_location
                );
                println!(
                    "{:>4}  {:<40} {:>9.1} {:>10}  {}",
                    outcome.row,
                    truncate(&route, 40),
                    plan.result.total_distance_miles,
                    format_hours(plan.result.hours_remaining),
                    plan.status.label()
                );
            }
            (None, error) => {
                println!(
                    "{:>4}  ERROR: {}",
                    outcome.row,
                    error.as_deref().unwrap_or("unknown error")
                );
            }
        }
    }

    println!(
        "\nCompliant: {}  Non-compliant: {}  Failed: {}",
        report.compliant, report.non_compliant, report.failed
    );

    Ok(())
}

pub fn output_cities(output_format: OutputFormat, locations: &[Waypoint]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(locations)?;
        println!("{}", content);
        return Ok(());
    }

    println!("{:<28} {:>10} {:>11}", "Name", "Lat", "Lng");
    println!("{}", "-".repeat(51));
    for location in locations {
        println!(
            "{:<28} {:>10.4} {:>11.4}",
            location.name, location.coordinate.lat, location.coordinate.lng
        );
    }
    println!("\n{} locations", locations.len());

    Ok(())
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars.saturating_sub(2)).collect();
        format!("{}..", head)
    }
}
