//! Planning Service - trip request to HOS-checked plan
//!
//! 1. Validate the raw request (names present, cycle hours in 0..=70)
//! 2. Resolve each location name to a coordinate
//! 3. Run the HOS segmentation engine
//! 4. Attach the cycle status and, with a departure time, the clock timeline

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tripcheck_domain::model::{Coordinate, CycleStatus, TripInput, TripResult, Waypoint};
use tripcheck_domain::repository::LocationRepository;
use tripcheck_domain::service::hos_engine::{self, MAX_CYCLE_HOURS};
use tripcheck_domain::service::{build_timeline, summarize_by_day, DailyDutySummary, TimelineEntry};
use tripcheck_infra::trips_csv::{TripRow, TripRowError};
use tripcheck_types::{Error, Result, ValidationError};

use crate::constants::BuiltinGazetteer;

/// Trip request as typed by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub cycle_hours_used: f64,
}

impl TripRequest {
    pub fn new(
        current_location: impl Into<String>,
        pickup_location: impl Into<String>,
        dropoff_location: impl Into<String>,
        cycle_hours_used: f64,
    ) -> Self {
        Self {
            current_location: current_location.into(),
            pickup_location: pickup_location.into(),
            dropoff_location: dropoff_location.into(),
            cycle_hours_used,
        }
    }

    /// Input-layer checks the engine leaves to its caller
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        for (field, value) in [
            ("currentLocation", &self.current_location),
            ("pickupLocation", &self.pickup_location),
            ("dropoffLocation", &self.dropoff_location),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::EmptyLocation {
                    field: field.to_string(),
                });
            }
        }
        if !self.cycle_hours_used.is_finite() {
            return Err(ValidationError::NotFinite {
                field: "cycleHoursUsed".to_string(),
                value: self.cycle_hours_used,
            });
        }
        if !(0.0..=MAX_CYCLE_HOURS).contains(&self.cycle_hours_used) {
            return Err(ValidationError::CycleHoursOutOfRange {
                value: self.cycle_hours_used,
            });
        }
        Ok(())
    }
}

/// Resolves location text to coordinates
///
/// Raw `"lat,lng"` text is used as is. Names are looked up in each source in
/// order; the built-in city table is always the last source.
pub struct LocationResolver {
    sources: Vec<Box<dyn LocationRepository>>,
}

impl Default for LocationResolver {
    fn default() -> Self {
        Self {
            sources: vec![Box::new(BuiltinGazetteer)],
        }
    }
}

impl LocationResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source that takes precedence over all existing ones
    pub fn with_source(mut self, source: Box<dyn LocationRepository>) -> Self {
        self.sources.insert(0, source);
        self
    }

    pub fn resolve(&self, text: &str, field: &str) -> Result<Waypoint> {
        let name = text.trim();
        if let Some(coordinate) = Coordinate::parse(name) {
            coordinate.validate(field)?;
            return Ok(Waypoint::new(name, coordinate));
        }
        for source in &self.sources {
            if let Some(coordinate) = source.find_by_name(name)? {
                tracing::debug!(field, name, %coordinate, "location resolved");
                return Ok(Waypoint::new(name, coordinate));
            }
        }
        Err(Error::UnknownLocation(format!("{} ('{}')", field, name)))
    }

    /// Every named location across sources, earlier sources winning on name clashes
    pub fn known_locations(&self) -> Result<Vec<Waypoint>> {
        let mut seen = std::collections::HashSet::new();
        let mut all = Vec::new();
        for source in &self.sources {
            for waypoint in source.find_all()? {
                let key = tripcheck_domain::repository::normalize_location_name(&waypoint.name);
                if seen.insert(key) {
                    all.push(waypoint);
                }
            }
        }
        Ok(all)
    }
}

/// Options for planning
#[derive(Debug, Clone)]
pub struct PlanningOptions {
    /// When set, the log is laid out on the clock from this time
    pub departure: Option<NaiveDateTime>,
    /// Threshold for the low-hours warning
    pub low_hours_warning: f64,
}

impl Default for PlanningOptions {
    fn default() -> Self {
        Self {
            departure: None,
            low_hours_warning: 10.0,
        }
    }
}

impl PlanningOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_departure(mut self, departure: NaiveDateTime) -> Self {
        self.departure = Some(departure);
        self
    }

    pub fn with_low_hours_warning(mut self, hours: f64) -> Self {
        self.low_hours_warning = hours;
        self
    }
}

/// A planned trip ready for presentation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlan {
    pub request: TripRequest,
    pub result: TripResult,
    pub status: CycleStatus,
    pub cycle_available_percent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Vec<TimelineEntry>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub daily_summary: Vec<DailyDutySummary>,
}

/// Plan a single trip
pub fn plan_trip(
    request: &TripRequest,
    resolver: &LocationResolver,
    options: &PlanningOptions,
) -> Result<TripPlan> {
    request.validate()?;

    let input = TripInput {
        current_location: resolver.resolve(&request.current_location, "currentLocation")?,
        pickup_location: resolver.resolve(&request.pickup_location, "pickupLocation")?,
        dropoff_location: resolver.resolve(&request.dropoff_location, "dropoffLocation")?,
        cycle_hours_used: request.cycle_hours_used,
    };

    let result = hos_engine::plan_trip(&input)?;
    let status = result.cycle_status(options.low_hours_warning);

    if result.is_compliant {
        tracing::info!(
            distance_miles = result.total_distance_miles,
            hours_remaining = result.hours_remaining,
            "trip planned"
        );
    } else {
        tracing::warn!(
            distance_miles = result.total_distance_miles,
            hours_remaining = result.hours_remaining,
            "trip exceeds the 70-hour cycle"
        );
    }

    let (timeline, daily_summary) = match options.departure {
        Some(departure) => {
            let timeline = build_timeline(&result.log, departure)?;
            let daily = summarize_by_day(&timeline);
            (Some(timeline), daily)
        }
        None => (None, Vec::new()),
    };

    Ok(TripPlan {
        request: request.clone(),
        cycle_available_percent: result.cycle_available_percent(),
        result,
        status,
        timeline,
        daily_summary,
    })
}

/// One batch row's outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOutcome {
    pub row: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<TripPlan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Results of a batch run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub outcomes: Vec<BatchOutcome>,
    pub compliant: usize,
    pub non_compliant: usize,
    pub failed: usize,
}

/// Plan every row independently; a failing row never stops the batch
pub fn plan_batch(
    rows: Vec<std::result::Result<TripRow, TripRowError>>,
    resolver: &LocationResolver,
    options: &PlanningOptions,
    default_cycle_hours_used: f64,
) -> BatchReport {
    let mut report = BatchReport::default();

    for row in rows {
        let outcome = match row {
            Ok(row) => {
                let request = TripRequest::new(
                    row.current,
                    row.pickup,
                    row.dropoff,
                    row.cycle_hours_used.unwrap_or(default_cycle_hours_used),
                );
                match plan_trip(&request, resolver, options) {
                    Ok(plan) => BatchOutcome {
                        row: row.row,
                        plan: Some(plan),
                        error: None,
                    },
                    Err(e) => BatchOutcome {
                        row: row.row,
                        plan: None,
                        error: Some(e.to_string()),
                    },
                }
            }
            Err(e) => BatchOutcome {
                row: e.row,
                plan: None,
                error: Some(e.message),
            },
        };

        match &outcome.plan {
            Some(plan) if plan.result.is_compliant => report.compliant += 1,
            Some(_) => report.non_compliant += 1,
            None => {
                tracing::warn!(row = outcome.row, error = ?outcome.error, "batch row failed");
                report.failed += 1;
            }
        }
        report.outcomes.push(outcome);
    }

    report
}
