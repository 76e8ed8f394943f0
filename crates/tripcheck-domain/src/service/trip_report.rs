//! Plain-text trip report

use crate::model::{CycleStatus, TripResult};

/// Format fractional hours as "Xh Ym"
pub fn format_hours(hours: f64) -> String {
    if !hours.is_finite() {
        return "N/A".to_string();
    }
    let sign = if hours < 0.0 { "-" } else { "" };
    let total_minutes = (hours.abs() * 60.0).round() as u64;
    let h = total_minutes / 60;
    let m = total_minutes % 60;
    if h > 0 {
        format!("{}{}h {}m", sign, h, m)
    } else {
        format!("{}{}m", sign, m)
    }
}

pub fn generate_trip_report(result: &TripResult, low_hours_warning: f64) -> String {
    let status = result.cycle_status(low_hours_warning);

    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("          Trip Plan & Hours of Service Log        \n");
    report.push_str("            (70-hour / 8-day cycle rule)          \n");
    report.push_str("==================================================\n\n");

    report.push_str("[Summary]\n");
    report.push_str(&format!(
        "  Total distance:        {:.0} mi\n",
        result.total_distance_miles
    ));
    report.push_str(&format!(
        "  Total trip hours:      {:.1} h ({})\n",
        result.total_duty_hours,
        format_hours(result.total_duty_hours)
    ));
    report.push_str(&format!(
        "  Driving hours:         {:.1} h\n",
        result.total_driving_hours
    ));
    report.push_str(&format!("  Fuel stops:            {}\n", result.fuel_stops.len()));
    report.push_str(&format!(
        "  Cycle hours used:      {:.1} h\n",
        result.cycle_hours_used
    ));
    report.push_str(&format!(
        "  Hours remaining:       {:.1} h ({:.0}% available)\n",
        result.hours_remaining,
        result.cycle_available_percent()
    ));
    report.push_str(&format!("  Status:                {}\n", status.label()));
    report.push('\n');

    report.push_str("[Legs]\n");
    report.push_str("-".repeat(70).as_str());
    report.push('\n');
    report.push_str(&format!(
        "{:<24} {:<24} {:>9} {:>9}\n",
        "From", "To", "Miles", "Hours"
    ));
    report.push_str("-".repeat(70).as_str());
    report.push('\n');
    for leg in &result.legs {
        report.push_str(&format!(
            "{:<24} {:<24} {:>9.0} {:>9.1}\n",
            truncate_str(&leg.from.name, 23),
            truncate_str(&leg.to.name, 23),
            leg.distance_miles,
            leg.driving_hours
        ));
    }
    report.push('\n');

    if !result.fuel_stops.is_empty() {
        report.push_str("[Fuel Stops]\n");
        for stop in &result.fuel_stops {
            report.push_str(&format!(
                "  {:>6.0} mi into leg at ({})\n",
                stop.distance_miles, stop.coordinate
            ));
        }
        report.push('\n');
    }

    report.push_str("[Duty Log]\n");
    report.push_str("-".repeat(50).as_str());
    report.push('\n');
    report.push_str(&format!(
        "{:<24} {:>10} {:>12}\n",
        "Activity", "Duration", "Status"
    ));
    report.push_str("-".repeat(50).as_str());
    report.push('\n');
    for entry in &result.log {
        report.push_str(&format!(
            "{:<24} {:>9.1}h {:>12}\n",
            truncate_str(&entry.activity, 23),
            entry.duration_hours,
            entry.kind.label()
        ));
    }
    report.push('\n');

    if status == CycleStatus::Violation {
        report.push_str("[Violation]\n");
        report.push_str(&format!(
            "  This trip needs {:.1} more driving hours than the cycle allows.\n\n",
            -result.hours_remaining
        ));
    }

    report.push_str("==================================================\n");
    report
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
