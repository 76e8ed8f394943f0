//! Clock-time view of a duty log
//!
//! Lays the log end to end from a departure time and rolls it up into one
//! summary per calendar day, the way a paper ELD sheet is kept.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};
use tripcheck_types::ValidationError;

use crate::model::{DutyKind, DutyLogEntry};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// A log entry placed on the clock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub activity: String,
    pub kind: DutyKind,
    pub start_offset_hours: f64,
    pub end_offset_hours: f64,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Hours per duty status for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyDutySummary {
    pub date: NaiveDate,
    pub driving_hours: f64,
    pub rest_hours: f64,
    /// Pickup and dropoff time
    pub on_duty_hours: f64,
}

impl DailyDutySummary {
    fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            driving_hours: 0.0,
            rest_hours: 0.0,
            on_duty_hours: 0.0,
        }
    }

    fn add(&mut self, kind: DutyKind, hours: f64) {
        if kind.is_on_duty_not_driving() {
            self.on_duty_hours += hours;
        } else if kind == DutyKind::Driving {
            self.driving_hours += hours;
        } else {
            self.rest_hours += hours;
        }
    }

    pub fn total_hours(&self) -> f64 {
        self.driving_hours + self.rest_hours + self.on_duty_hours
    }
}

/// Clock time `hours` after `departure`, or `None` past chrono's range
fn offset_time(departure: NaiveDateTime, hours: f64) -> Option<NaiveDateTime> {
    let delta = TimeDelta::try_milliseconds((hours * MILLIS_PER_HOUR).round() as i64)?;
    departure.checked_add_signed(delta)
}

/// Place each entry back to back starting at `departure`
pub fn build_timeline(
    log: &[DutyLogEntry],
    departure: NaiveDateTime,
) -> Result<Vec<TimelineEntry>, ValidationError> {
    let out_of_range = || ValidationError::DepartureOutOfRange {
        departure: departure.to_string(),
    };

    let mut offset = 0.0;
    let mut timeline = Vec::with_capacity(log.len());
    for entry in log {
        let start_offset_hours = offset;
        offset += entry.duration_hours;
        timeline.push(TimelineEntry {
            activity: entry.activity.clone(),
            kind: entry.kind,
            start_offset_hours,
            end_offset_hours: offset,
            start: offset_time(departure, start_offset_hours).ok_or_else(out_of_range)?,
            end: offset_time(departure, offset).ok_or_else(out_of_range)?,
        });
    }

    Ok(timeline)
}

/// Roll a timeline up by calendar day, splitting entries that cross midnight
pub fn summarize_by_day(timeline: &[TimelineEntry]) -> Vec<DailyDutySummary> {
    let mut days: BTreeMap<NaiveDate, DailyDutySummary> = BTreeMap::new();

    for entry in timeline {
        let mut cursor = entry.start;
        while cursor < entry.end {
            let date = cursor.date();
            let chunk_end = match date.succ_opt() {
                Some(next) => entry.end.min(next.and_time(NaiveTime::MIN)),
                None => entry.end,
            };
            let hours = (chunk_end - cursor).num_milliseconds() as f64 / MILLIS_PER_HOUR;
            days.entry(date)
                .or_insert_with(|| DailyDutySummary::empty(date))
                .add(entry.kind, hours);
            cursor = chunk_end;
        }
    }

    days.into_values().collect()
}
