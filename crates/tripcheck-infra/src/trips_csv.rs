//! CSV loader for batch trip planning
//!
//! Expected columns (header optional):
//! current, pickup, dropoff, [cycle_hours_used]

use std::path::Path;

use thiserror::Error;
use tripcheck_types::Result;

/// One trip request read from a batch file
#[derive(Debug, Clone, PartialEq)]
pub struct TripRow {
    /// 1-based row number in the file
    pub row: usize,
    pub current: String,
    pub pickup: String,
    pub dropoff: String,
    /// None when the column is absent or blank
    pub cycle_hours_used: Option<f64>,
}

/// A row that could not be read as a trip
#[derive(Debug, Clone, PartialEq, Error)]
#[error("row {row}: {message}")]
pub struct TripRowError {
    pub row: usize,
    pub message: String,
}

/// Load trip rows; malformed rows are returned as errors in place
pub fn load_trips_from_csv(path: &Path) -> Result<Vec<std::result::Result<TripRow, TripRowError>>> {
    let content = std::fs::read_to_string(path)?;
    parse_trips_csv(&content)
}

pub fn parse_trips_csv(content: &str) -> Result<Vec<std::result::Result<TripRow, TripRowError>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record = record?;
        if record.iter().all(|f| f.is_empty()) {
            continue;
        }
        if row_idx == 0 && is_header(&record) {
            continue;
        }
        let row = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(row_idx + 1);
        rows.push(parse_record(&record, row));
    }
    Ok(rows)
}

fn is_header(record: &csv::StringRecord) -> bool {
    record.iter().any(|h| {
        let h = h.to_lowercase();
        h == "current" || h == "pickup" || h == "dropoff" || h.starts_with("cycle")
    })
}

fn parse_record(
    record: &csv::StringRecord,
    row: usize,
) -> std::result::Result<TripRow, TripRowError> {
    if record.len() < 3 {
        return Err(TripRowError {
            row,
            message: format!(
                "expected current,pickup,dropoff but found {} column(s)",
                record.len()
            ),
        });
    }
    let cycle_hours_used = match record.get(3).filter(|s| !s.is_empty()) {
        Some(value) => Some(value.parse::<f64>().map_err(|_| TripRowError {
            row,
            message: format!("invalid cycle hours '{}'", value),
        })?),
        None => None,
    };

    Ok(TripRow {
        row,
        current: record.get(0).unwrap_or("").to_string(),
        pickup: record.get(1).unwrap_or("").to_string(),
        dropoff: record.get(2).unwrap_or("").to_string(),
        cycle_hours_used,
    })
}
