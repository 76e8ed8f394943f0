//! Property tests for the HOS segmentation engine and geo math

use proptest::prelude::*;
use tripcheck_domain::model::{Coordinate, DutyKind, DutyLogEntry, TripInput, Waypoint};
use tripcheck_domain::service::geo::{fuel_stops, interpolate, FUEL_STOP_INTERVAL_MILES};
use tripcheck_domain::service::hos_engine::{
    build_duty_log, plan_trip, AVERAGE_SPEED_MPH, MAX_CONTINUOUS_DRIVING_HOURS, MAX_CYCLE_HOURS,
};

const TOL: f64 = 1e-6;

/// Split the log into the entries contributed by each leg (fixed stops excluded)
fn leg_entries(log: &[DutyLogEntry]) -> (Vec<&DutyLogEntry>, Vec<&DutyLogEntry>) {
    let pickup = log
        .iter()
        .position(|e| e.kind == DutyKind::Pickup)
        .expect("pickup entry");
    let dropoff = log
        .iter()
        .position(|e| e.kind == DutyKind::Dropoff)
        .expect("dropoff entry");
    (
        log[..pickup].iter().collect(),
        log[pickup + 1..dropoff].iter().collect(),
    )
}

fn driving_sum(entries: &[&DutyLogEntry]) -> f64 {
    entries
        .iter()
        .filter(|e| e.kind == DutyKind::Driving)
        .map(|e| e.duration_hours)
        .sum()
}

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lng)| Coordinate::new(lat, lng))
}

proptest! {
    #[test]
    fn driving_per_leg_matches_distance(a in 0.0f64..5000.0, b in 0.0f64..5000.0) {
        let log = build_duty_log([a, b]).unwrap();
        let (first, second) = leg_entries(&log.entries);
        prop_assert!((driving_sum(&first) - a / AVERAGE_SPEED_MPH).abs() < TOL);
        prop_assert!((driving_sum(&second) - b / AVERAGE_SPEED_MPH).abs() < TOL);
    }

    #[test]
    fn rest_never_ends_a_leg(a in 0.0f64..5000.0, b in 0.0f64..5000.0) {
        let log = build_duty_log([a, b]).unwrap();
        let (first, second) = leg_entries(&log.entries);
        for leg in [first, second] {
            if let Some(last) = leg.last() {
                prop_assert_eq!(last.kind, DutyKind::Driving);
            }
        }
    }

    #[test]
    fn segments_never_exceed_cap(a in 0.0f64..5000.0, b in 0.0f64..5000.0) {
        let log = build_duty_log([a, b]).unwrap();
        for entry in log.entries.iter().filter(|e| e.kind == DutyKind::Driving) {
            prop_assert!(entry.duration_hours > 0.0);
            prop_assert!(entry.duration_hours <= MAX_CONTINUOUS_DRIVING_HOURS);
        }
    }

    #[test]
    fn accumulators_consistent(a in 0.0f64..5000.0, b in 0.0f64..5000.0) {
        let log = build_duty_log([a, b]).unwrap();
        let total: f64 = log.entries.iter().map(|e| e.duration_hours).sum();
        prop_assert!((log.total_duty_hours - total).abs() < TOL);
        prop_assert!(log.total_driving_hours <= log.total_duty_hours + TOL);
    }

    #[test]
    fn compliance_matches_budget(
        current in coordinate(),
        pickup in coordinate(),
        dropoff in coordinate(),
        used in 0.0f64..=70.0,
    ) {
        let result = plan_trip(&TripInput {
            current_location: Waypoint::new("current", current),
            pickup_location: Waypoint::new("pickup", pickup),
            dropoff_location: Waypoint::new("dropoff", dropoff),
            cycle_hours_used: used,
        }).unwrap();
        let expected = MAX_CYCLE_HOURS - used - result.total_driving_hours;
        prop_assert!((result.hours_remaining - expected).abs() < TOL);
        prop_assert_eq!(result.is_compliant, result.hours_remaining >= 0.0);
    }

    #[test]
    fn fuel_stop_count_and_placement(
        a in coordinate(),
        b in coordinate(),
        distance in 0.0f64..6000.0,
    ) {
        let stops = fuel_stops(a, b, distance, FUEL_STOP_INTERVAL_MILES);
        let n = (distance / FUEL_STOP_INTERVAL_MILES).floor() as usize;
        prop_assert_eq!(stops.len(), n);
        for (i, stop) in stops.iter().enumerate() {
            let idx = i + 1;
            let expected = interpolate(a, b, idx as f64 / (n + 1) as f64);
            prop_assert!((stop.coordinate.lat - expected.lat).abs() < 1e-9);
            prop_assert!((stop.coordinate.lng - expected.lng).abs() < 1e-9);
            let expected_miles = idx as f64 * FUEL_STOP_INTERVAL_MILES;
            prop_assert!((stop.distance_miles - expected_miles).abs() < 1e-9);
        }
    }
}

#[test]
fn zero_distance_leg_has_no_driving_or_rest() {
    let log = build_duty_log([0.0, 300.0]).unwrap();
    let (first, _) = leg_entries(&log.entries);
    assert!(first.is_empty());
}
