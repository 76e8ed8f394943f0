//! Geographic coordinates and named waypoints

use serde::{Deserialize, Serialize};
use tripcheck_types::ValidationError;

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Build a coordinate, rejecting NaN and out-of-range values
    pub fn checked(lat: f64, lng: f64, field: &str) -> Result<Self, ValidationError> {
        let coord = Self { lat, lng };
        coord.validate(field)?;
        Ok(coord)
    }

    /// Check latitude ∈ [-90, 90] and longitude ∈ [-180, 180]
    pub fn validate(&self, field: &str) -> Result<(), ValidationError> {
        for value in [self.lat, self.lng] {
            if !value.is_finite() {
                return Err(ValidationError::NotFinite {
                    field: field.to_string(),
                    value,
                });
            }
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(ValidationError::LatitudeOutOfRange {
                field: field.to_string(),
                value: self.lat,
            });
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(ValidationError::LongitudeOutOfRange {
                field: field.to_string(),
                value: self.lng,
            });
        }
        Ok(())
    }

    /// Parse a raw `"lat,lng"` string (e.g. "41.8781,-87.6298")
    ///
    /// Returns None when the text is not two comma-separated numbers.
    /// Range checks are left to [`Coordinate::validate`].
    pub fn parse(text: &str) -> Option<Self> {
        let (lat, lng) = text.split_once(',')?;
        let lat: f64 = lat.trim().parse().ok()?;
        let lng: f64 = lng.trim().parse().ok()?;
        Some(Self { lat, lng })
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}

/// A resolved trip endpoint: the name the user typed plus its coordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub name: String,
    #[serde(flatten)]
    pub coordinate: Coordinate,
}

impl Waypoint {
    pub fn new(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            name: name.into(),
            coordinate,
        }
    }
}
