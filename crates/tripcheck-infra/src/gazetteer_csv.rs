//! CSV loader for named locations
//!
//! Expected columns (header optional):
//! name, lat, lng

use std::path::Path;

use tripcheck_domain::model::{Coordinate, Waypoint};
use tripcheck_types::{Error, Result};

/// Load named locations from a CSV file
pub fn load_locations_from_csv(path: &Path) -> Result<Vec<Waypoint>> {
    let content = std::fs::read_to_string(path)?;
    parse_locations_csv(&content)
}

/// Parse named locations from CSV text
///
/// Every row must carry a valid coordinate; a bad row fails the whole file
/// with its 1-based row number.
pub fn parse_locations_csv(content: &str) -> Result<Vec<Waypoint>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(content.as_bytes());

    let mut locations = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record = record?;
        let row_num = line_number(&record, row_idx);
        if record.iter().all(|f| f.is_empty()) {
            continue;
        }
        if row_idx == 0 && is_header(&record) {
            continue;
        }
        locations.push(parse_record(&record, row_num)?);
    }
    Ok(locations)
}

/// File line of a record; comment lines are counted
fn line_number(record: &csv::StringRecord, row_idx: usize) -> usize {
    record
        .position()
        .map(|p| p.line() as usize)
        .unwrap_or(row_idx + 1)
}

fn is_header(record: &csv::StringRecord) -> bool {
    record
        .get(1)
        .is_some_and(|v| v.parse::<f64>().is_err() && v.to_lowercase().starts_with("lat"))
}

fn parse_record(record: &csv::StringRecord, row_num: usize) -> Result<Waypoint> {
    if record.len() < 3 {
        return Err(Error::Gazetteer(format!(
            "row {}: expected name,lat,lng but found {} column(s)",
            row_num,
            record.len()
        )));
    }
    let name = record.get(0).unwrap_or("").to_string();
    if name.is_empty() {
        return Err(Error::Gazetteer(format!("row {}: empty location name", row_num)));
    }
    let lat = parse_number(record.get(1).unwrap_or(""), "lat", row_num)?;
    let lng = parse_number(record.get(2).unwrap_or(""), "lng", row_num)?;
    let coordinate = Coordinate::checked(lat, lng, &name)?;
    Ok(Waypoint::new(name, coordinate))
}

fn parse_number(value: &str, column: &str, row_num: usize) -> Result<f64> {
    value.parse::<f64>().map_err(|_| {
        Error::Gazetteer(format!(
            "row {}, column {}: invalid number '{}'",
            row_num, column, value
        ))
    })
}
