//! Built-in gazetteer of major US freight cities
//!
//! Each city resolves by bare name ("denver") or with its state ("denver, co").

use std::collections::HashMap;
use std::sync::LazyLock;

use tripcheck_domain::model::{Coordinate, Waypoint};
use tripcheck_domain::repository::{normalize_location_name, LocationRepository};
use tripcheck_types::Error;

struct BuiltinCity {
    name: &'static str,
    state: &'static str,
    lat: f64,
    lng: f64,
}

const CITIES: [BuiltinCity; 10] = [
    BuiltinCity { name: "Chicago", state: "IL", lat: 41.8781, lng: -87.6298 },
    BuiltinCity { name: "Denver", state: "CO", lat: 39.7392, lng: -104.9903 },
    BuiltinCity { name: "Los Angeles", state: "CA", lat: 34.0522, lng: -118.2437 },
    BuiltinCity { name: "New York", state: "NY", lat: 40.7128, lng: -74.006 },
    BuiltinCity { name: "Miami", state: "FL", lat: 25.7617, lng: -80.1918 },
    BuiltinCity { name: "Seattle", state: "WA", lat: 47.6062, lng: -122.3321 },
    BuiltinCity { name: "Dallas", state: "TX", lat: 32.7767, lng: -96.797 },
    BuiltinCity { name: "Atlanta", state: "GA", lat: 33.749, lng: -84.388 },
    BuiltinCity { name: "Phoenix", state: "AZ", lat: 33.4484, lng: -112.074 },
    BuiltinCity { name: "Boston", state: "MA", lat: 42.3601, lng: -71.0589 },
];

/// Normalized name -> coordinate, both key forms per city
static CITY_INDEX: LazyLock<HashMap<String, Coordinate>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    for city in &CITIES {
        let coord = Coordinate::new(city.lat, city.lng);
        m.insert(normalize_location_name(city.name), coord);
        m.insert(
            normalize_location_name(&format!("{}, {}", city.name, city.state)),
            coord,
        );
    }
    m
});

/// Look up a built-in city by name
pub fn get_city(name: &str) -> Option<Coordinate> {
    CITY_INDEX.get(&normalize_location_name(name)).copied()
}

/// All built-in cities as "City, ST" waypoints
pub fn builtin_locations() -> Vec<Waypoint> {
    CITIES
        .iter()
        .map(|c| {
            Waypoint::new(
                format!("{}, {}", c.name, c.state),
                Coordinate::new(c.lat, c.lng),
            )
        })
        .collect()
}

/// The built-in table exposed as a location repository
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinGazetteer;

impl LocationRepository for BuiltinGazetteer {
    fn find_by_name(&self, name: &str) -> Result<Option<Coordinate>, Error> {
        Ok(get_city(name))
    }

    fn find_all(&self) -> Result<Vec<Waypoint>, Error> {
        Ok(builtin_locations())
    }
}
