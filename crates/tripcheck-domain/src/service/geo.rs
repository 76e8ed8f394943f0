//! Distance and interpolation primitives
//!
//! Distances are great-circle (haversine) miles between point pairs. No road
//! network is involved. Inputs are assumed to be valid coordinates.

use crate::model::{Coordinate, FuelStop};

/// Mean Earth radius in miles
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Spacing between informational fuel stops
pub const FUEL_STOP_INTERVAL_MILES: f64 = 1000.0;

/// Great-circle distance in miles
pub fn distance_miles(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Linear interpolation of latitude and longitude independently
///
/// Not a geodesic slerp: the result is a plotting aid, not a point on the road.
pub fn interpolate(a: Coordinate, b: Coordinate, ratio: f64) -> Coordinate {
    Coordinate {
        lat: a.lat + (b.lat - a.lat) * ratio,
        lng: a.lng + (b.lng - a.lng) * ratio,
    }
}

/// Evenly spaced fuel stops along a leg
///
/// Yields `floor(leg_distance / interval)` stops. Stop `i` (1-based) sits at
/// ratio `i / (n + 1)` between the endpoints and carries `i * interval` miles.
pub fn fuel_stops(
    a: Coordinate,
    b: Coordinate,
    leg_distance_miles: f64,
    interval_miles: f64,
) -> Vec<FuelStop> {
    if interval_miles <= 0.0 || !leg_distance_miles.is_finite() || leg_distance_miles <= 0.0 {
        return Vec::new();
    }
    let count = (leg_distance_miles / interval_miles).floor() as usize;

    (1..=count)
        .map(|i| {
            let ratio = i as f64 / (count + 1) as f64;
            FuelStop {
                coordinate: interpolate(a, b, ratio),
                distance_miles: i as f64 * interval_miles,
            }
        })
        .collect()
}
