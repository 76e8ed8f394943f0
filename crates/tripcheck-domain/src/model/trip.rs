//! Trip input and result records

use serde::{Deserialize, Serialize};

use super::{Coordinate, CycleStatus, DutyLogEntry, Waypoint};

/// One point-to-point segment of the trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    pub from: Waypoint,
    pub to: Waypoint,
    pub distance_miles: f64,
    /// distance_miles / average speed
    pub driving_hours: f64,
}

/// Informational refuelling waypoint along a leg
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelStop {
    pub coordinate: Coordinate,
    /// Distance into the leg at which the stop occurs
    pub distance_miles: f64,
}

/// Engine input: three resolved locations and the hours already used this cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripInput {
    pub current_location: Waypoint,
    pub pickup_location: Waypoint,
    pub dropoff_location: Waypoint,
    pub cycle_hours_used: f64,
}

/// Complete result of one trip computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripResult {
    pub legs: Vec<Leg>,
    pub fuel_stops: Vec<FuelStop>,
    pub log: Vec<DutyLogEntry>,
    /// Driving + rest + pickup/dropoff time
    pub total_duty_hours: f64,
    /// Driving time only; this is what counts against the cycle
    pub total_driving_hours: f64,
    pub total_distance_miles: f64,
    pub cycle_hours_used: f64,
    /// May be negative for a non-compliant trip
    pub hours_remaining: f64,
    pub is_compliant: bool,
}

impl TripResult {
    pub fn cycle_status(&self, warning_threshold: f64) -> CycleStatus {
        CycleStatus::from_hours_remaining(self.hours_remaining, warning_threshold)
    }

    /// Share of the 70-hour cycle still available after the trip, in percent
    pub fn cycle_available_percent(&self) -> f64 {
        self.hours_remaining / crate::service::hos_engine::MAX_CYCLE_HOURS * 100.0
    }
}
