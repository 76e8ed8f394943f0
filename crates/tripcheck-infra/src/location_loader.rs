//! Gazetteer loader for TOML and CSV location files
//!
//! TOML layout:
//! ```toml
//! [[locations]]
//! name = "Reno, NV"
//! lat = 39.5296
//! lng = -119.8138
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tripcheck_domain::model::{Coordinate, Waypoint};
use tripcheck_domain::repository::normalize_location_name;
use tripcheck_types::{ConfigError, Error, Result};

use crate::gazetteer_csv::parse_locations_csv;

/// Container for parsing a locations TOML file
#[derive(Debug, Deserialize)]
struct LocationFile {
    #[serde(default)]
    locations: Vec<LocationRow>,
}

#[derive(Debug, Deserialize)]
struct LocationRow {
    name: String,
    lat: f64,
    lng: f64,
}

/// Named locations keyed by normalized name
#[derive(Debug, Default)]
pub struct LocationLoader {
    locations: HashMap<String, Waypoint>,
}

impl LocationLoader {
    /// Load a gazetteer file; `.toml` is parsed as TOML, anything else as CSV
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(format!(
                "Gazetteer file not found: {}",
                path.display()
            )));
        }
        let content = fs::read_to_string(path)?;

        let is_toml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("toml"));

        let loader = if is_toml {
            Self::load_from_toml_str(&content)?
        } else {
            Self::from_waypoints(parse_locations_csv(&content)?)
        };
        tracing::debug!(path = %path.display(), count = loader.len(), "gazetteer loaded");
        Ok(loader)
    }

    /// Load locations from a TOML string
    pub fn load_from_toml_str(toml_content: &str) -> Result<Self> {
        let file: LocationFile = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse locations TOML: {}",
                e
            )))
        })?;

        let waypoints = file
            .locations
            .into_iter()
            .map(|row| -> Result<Waypoint> {
                let coordinate = Coordinate::checked(row.lat, row.lng, &row.name)?;
                Ok(Waypoint::new(row.name, coordinate))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::from_waypoints(waypoints))
    }

    /// Later entries with the same normalized name replace earlier ones
    pub fn from_waypoints(waypoints: Vec<Waypoint>) -> Self {
        let locations = waypoints
            .into_iter()
            .map(|w| (normalize_location_name(&w.name), w))
            .collect();
        Self { locations }
    }

    pub fn get(&self, name: &str) -> Option<&Waypoint> {
        self.locations.get(&normalize_location_name(name))
    }

    /// All locations sorted by name
    pub fn all_locations(&self) -> Vec<&Waypoint> {
        let mut all: Vec<&Waypoint> = self.locations.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
