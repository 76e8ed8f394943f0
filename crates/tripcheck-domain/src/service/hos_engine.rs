//! Hours-of-service segmentation engine
//!
//! Converts the two legs of a trip (current -> pickup, pickup -> dropoff) into
//! a chronological duty log. Continuous driving is capped at 11 hours; each cap
//! is followed by a 10-hour rest only when driving remains on the same leg.
//! Pickup and dropoff each add one on-duty hour. Compliance is judged against
//! the 70-hour / 8-day cycle using driving time alone.

use tripcheck_types::ValidationError;

use crate::model::{DutyKind, DutyLogEntry, Leg, TripInput, TripResult, Waypoint};
use crate::service::geo::{self, FUEL_STOP_INTERVAL_MILES};

pub const AVERAGE_SPEED_MPH: f64 = 55.0;
pub const MAX_CONTINUOUS_DRIVING_HOURS: f64 = 11.0;
pub const REST_PERIOD_HOURS: f64 = 10.0;
/// Applied identically to pickup and dropoff
pub const FIXED_STOP_DUTY_HOURS: f64 = 1.0;
pub const MAX_CYCLE_HOURS: f64 = 70.0;

const LEG_FIELDS: [&str; 2] = [
    "currentLocation->pickupLocation",
    "pickupLocation->dropoffLocation",
];

/// Ordered duty log with its two accumulators kept apart
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DutyLog {
    pub entries: Vec<DutyLogEntry>,
    /// Every entry's duration, rest and fixed stops included
    pub total_duty_hours: f64,
    /// Driving entries only
    pub total_driving_hours: f64,
}

impl DutyLog {
    fn push(&mut self, entry: DutyLogEntry) {
        self.total_duty_hours += entry.duration_hours;
        self.entries.push(entry);
    }

    /// Slice one leg's driving time into legal segments
    fn append_leg(&mut self, mut remaining_hours: f64, activity: &str) {
        while remaining_hours > 0.0 {
            let segment = remaining_hours.min(MAX_CONTINUOUS_DRIVING_HOURS);
            self.push(DutyLogEntry::new(activity, segment, DutyKind::Driving));
            remaining_hours -= segment;

            if remaining_hours > 0.0 {
                self.push(DutyLogEntry::new("Rest period", REST_PERIOD_HOURS, DutyKind::Rest));
            }
        }
    }
}

/// Outcome of checking the trip's driving against the cycle budget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleVerdict {
    /// Not clamped; negative means the cycle limit is exceeded
    pub hours_remaining: f64,
    pub is_compliant: bool,
}

/// Judge compliance against the 70-hour cycle
///
/// `cycle_hours_used` is trusted; range checking belongs to the input layer.
pub fn evaluate_cycle(cycle_hours_used: f64, total_driving_hours: f64) -> CycleVerdict {
    let hours_remaining = MAX_CYCLE_HOURS - cycle_hours_used - total_driving_hours;
    CycleVerdict {
        hours_remaining,
        is_compliant: hours_remaining >= 0.0,
    }
}

/// Build the duty log for the two legs given their distances in miles
pub fn build_duty_log(leg_distances_miles: [f64; 2]) -> Result<DutyLog, ValidationError> {
    for (distance, field) in leg_distances_miles.iter().zip(LEG_FIELDS) {
        validate_distance(*distance, field)?;
    }

    let [to_pickup, to_dropoff] = leg_distances_miles;
    let mut log = DutyLog::default();

    log.append_leg(to_pickup / AVERAGE_SPEED_MPH, "Driving to pickup");
    log.push(DutyLogEntry::new("Pickup cargo", FIXED_STOP_DUTY_HOURS, DutyKind::Pickup));

    log.append_leg(to_dropoff / AVERAGE_SPEED_MPH, "Driving to dropoff");
    log.push(DutyLogEntry::new("Dropoff cargo", FIXED_STOP_DUTY_HOURS, DutyKind::Dropoff));

    log.total_driving_hours = log
        .entries
        .iter()
        .filter(|e| e.is_driving())
        .map(|e| e.duration_hours)
        .sum();

    Ok(log)
}

/// Plan a complete trip: legs, fuel stops, duty log and cycle verdict
pub fn plan_trip(input: &TripInput) -> Result<TripResult, ValidationError> {
    input.current_location.coordinate.validate("currentLocation")?;
    input.pickup_location.coordinate.validate("pickupLocation")?;
    input.dropoff_location.coordinate.validate("dropoffLocation")?;
    if !input.cycle_hours_used.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "cycleHoursUsed".to_string(),
            value: input.cycle_hours_used,
        });
    }

    let legs = vec![
        build_leg(&input.current_location, &input.pickup_location),
        build_leg(&input.pickup_location, &input.dropoff_location),
    ];

    let fuel_stops = legs
        .iter()
        .flat_map(|leg| {
            geo::fuel_stops(
                leg.from.coordinate,
                leg.to.coordinate,
                leg.distance_miles,
                FUEL_STOP_INTERVAL_MILES,
            )
        })
        .collect();

    let log = build_duty_log([legs[0].distance_miles, legs[1].distance_miles])?;
    let verdict = evaluate_cycle(input.cycle_hours_used, log.total_driving_hours);

    tracing::debug!(
        entries = log.entries.len(),
        driving_hours = log.total_driving_hours,
        duty_hours = log.total_duty_hours,
        hours_remaining = verdict.hours_remaining,
        "duty log built"
    );

    Ok(TripResult {
        total_distance_miles: legs.iter().map(|l| l.distance_miles).sum(),
        legs,
        fuel_stops,
        log: log.entries,
        total_duty_hours: log.total_duty_hours,
        total_driving_hours: log.total_driving_hours,
        cycle_hours_used: input.cycle_hours_used,
        hours_remaining: verdict.hours_remaining,
        is_compliant: verdict.is_compliant,
    })
}

fn build_leg(from: &Waypoint, to: &Waypoint) -> Leg {
    let distance_miles = geo::distance_miles(from.coordinate, to.coordinate);
    Leg {
        from: from.clone(),
        to: to.clone(),
        distance_miles,
        driving_hours: distance_miles / AVERAGE_SPEED_MPH,
    }
}

fn validate_distance(distance: f64, field: &str) -> Result<(), ValidationError> {
    if !distance.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
            value: distance,
        });
    }
    if distance < 0.0 {
        return Err(ValidationError::NegativeDistance {
            field: field.to_string(),
            value: distance,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Coordinate;

    fn kinds(log: &DutyLog) -> Vec<DutyKind> {
        log.entries.iter().map(|e| e.kind).collect()
    }

    fn input(current: Coordinate, pickup: Coordinate, dropoff: Coordinate, used: f64) -> TripInput {
        TripInput {
            current_location: Waypoint::new("current", current),
            pickup_location: Waypoint::new("pickup", pickup),
            dropoff_location: Waypoint::new("dropoff", dropoff),
            cycle_hours_used: used,
        }
    }

    #[test]
    fn test_short_leg_single_segment() {
        // 500 mi -> 9.09h, no rest
        let log = build_duty_log([500.0, 0.0]).unwrap();
        assert_eq!(kinds(&log), vec![DutyKind::Driving, DutyKind::Pickup, DutyKind::Dropoff]);
        assert!((log.entries[0].duration_hours - 500.0 / 55.0).abs() < 1e-9);
        assert_eq!(log.entries[0].activity, "Driving to pickup");
    }

    #[test]
    fn test_long_leg_segments_with_rests() {
        // 1300 mi -> 23.6h: 11 / rest / 11 / rest / 1.6
        let log = build_duty_log([1300.0, 0.0]).unwrap();
        assert_eq!(
            kinds(&log),
            vec![
                DutyKind::Driving,
                DutyKind::Rest,
                DutyKind::Driving,
                DutyKind::Rest,
                DutyKind::Driving,
                DutyKind::Pickup,
                DutyKind::Dropoff,
            ]
        );
        assert!((log.entries[0].duration_hours - 11.0).abs() < 1e-9);
        assert!((log.entries[1].duration_hours - 10.0).abs() < 1e-9);
        assert!((log.entries[2].duration_hours - 11.0).abs() < 1e-9);
        assert!((log.entries[4].duration_hours - (1300.0 / 55.0 - 22.0)).abs() < 1e-9);
        assert!((log.total_driving_hours - 1300.0 / 55.0).abs() < 1e-9);
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_rest() {
        // 1210 mi -> exactly 22h
        let log = build_duty_log([0.0, 1210.0]).unwrap();
        assert_eq!(
            kinds(&log),
            vec![
                DutyKind::Pickup,
                DutyKind::Driving,
                DutyKind::Rest,
                DutyKind::Driving,
                DutyKind::Dropoff,
            ]
        );
    }

    #[test]
    fn test_zero_distance_legs_only_fixed_stops() {
        let log = build_duty_log([0.0, 0.0]).unwrap();
        assert_eq!(kinds(&log), vec![DutyKind::Pickup, DutyKind::Dropoff]);
        assert!((log.total_duty_hours - 2.0).abs() < f64::EPSILON);
        assert!(log.total_driving_hours.abs() < f64::EPSILON);
    }

    #[test]
    fn test_accumulators_are_separate() {
        let log = build_duty_log([1300.0, 700.0]).unwrap();
        let sum: f64 = log.entries.iter().map(|e| e.duration_hours).sum();
        assert!((log.total_duty_hours - sum).abs() < 1e-9);
        assert!((log.total_driving_hours - 2000.0 / 55.0).abs() < 1e-9);

        // 1300 mi -> 11 + 11 + 1.64 h, 700 mi -> 11 + 1.73 h: three rests
        let rests = log.entries.iter().filter(|e| e.kind == DutyKind::Rest).count();
        assert_eq!(rests, 3);
        let expected_gap = rests as f64 * REST_PERIOD_HOURS + 2.0 * FIXED_STOP_DUTY_HOURS;
        assert!((expected_gap - 32.0).abs() < 1e-9);
        assert!((log.total_duty_hours - log.total_driving_hours - expected_gap).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_negative_distance() {
        let err = build_duty_log([-1.0, 10.0]).unwrap_err();
        assert!(matches!(err, ValidationError::NegativeDistance { .. }));
    }

    #[test]
    fn test_rejects_nan_distance() {
        let err = build_duty_log([10.0, f64::NAN]).unwrap_err();
        match err {
            ValidationError::NotFinite { field, .. } => {
                assert_eq!(field, "pickupLocation->dropoffLocation")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_cycle_compliant() {
        // 65 used + 3 driving -> 2 remaining
        let log = build_duty_log([110.0, 55.0]).unwrap();
        let verdict = evaluate_cycle(65.0, log.total_driving_hours);
        assert!((verdict.hours_remaining - 2.0).abs() < 1e-9);
        assert!(verdict.is_compliant);
    }

    #[test]
    fn test_cycle_violation_not_clamped() {
        // 68 used + 5 driving -> -3
        let log = build_duty_log([165.0, 110.0]).unwrap();
        let verdict = evaluate_cycle(68.0, log.total_driving_hours);
        assert!((verdict.hours_remaining + 3.0).abs() < 1e-9);
        assert!(!verdict.is_compliant);
    }

    #[test]
    fn test_cycle_exactly_zero_is_compliant() {
        let verdict = evaluate_cycle(60.0, 10.0);
        assert!(verdict.is_compliant);
    }

    #[test]
    fn test_plan_trip_chicago_denver_la() {
        let chicago = Coordinate::new(41.8781, -87.6298);
        let denver = Coordinate::new(39.7392, -104.9903);
        let la = Coordinate::new(34.0522, -118.2437);
        let result = plan_trip(&input(chicago, denver, la, 20.0)).unwrap();

        assert_eq!(result.legs.len(), 2);
        assert_eq!(result.legs[0].from.name, "current");
        assert_eq!(result.legs[1].to.name, "dropoff");
        assert!((result.total_distance_miles
            - (result.legs[0].distance_miles + result.legs[1].distance_miles))
            .abs()
            < 1e-9);
        // both legs under 1000 mi
        assert!(result.fuel_stops.is_empty());
        assert_eq!(result.log.last().map(|e| e.kind), Some(DutyKind::Dropoff));
        assert!(result.is_compliant);
        assert!((result.cycle_hours_used - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_plan_trip_fuel_stops_in_leg_order() {
        let new_york = Coordinate::new(40.7128, -74.006);
        let la = Coordinate::new(34.0522, -118.2437);
        let result = plan_trip(&input(new_york, la, new_york, 0.0)).unwrap();
        // ~2450 mi each way -> 2 stops per leg
        assert_eq!(result.fuel_stops.len(), 4);
        assert!(result.fuel_stops[0].coordinate.lng < -74.0);
        assert!(result.fuel_stops[3].coordinate.lng > result.fuel_stops[2].coordinate.lng);
        assert!(!result.is_compliant);
    }

    #[test]
    fn test_plan_trip_rejects_invalid_coordinate() {
        let bad = Coordinate::new(120.0, 0.0);
        let ok = Coordinate::new(0.0, 0.0);
        let err = plan_trip(&input(ok, bad, ok, 0.0)).unwrap_err();
        match err {
            ValidationError::LatitudeOutOfRange { field, .. } => {
                assert_eq!(field, "pickupLocation")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_plan_trip_rejects_nan_cycle_hours() {
        let ok = Coordinate::new(0.0, 0.0);
        let err = plan_trip(&input(ok, ok, ok, f64::NAN)).unwrap_err();
        assert!(matches!(err, ValidationError::NotFinite { .. }));
    }

    #[test]
    fn test_plan_trip_trusts_out_of_range_cycle_hours() {
        let ok = Coordinate::new(0.0, 0.0);
        let result = plan_trip(&input(ok, ok, ok, 75.0)).unwrap();
        assert!((result.hours_remaining + 5.0).abs() < 1e-9);
        assert!(!result.is_compliant);
    }
}
