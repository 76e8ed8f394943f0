//! Repository trait definitions for location lookup

use tripcheck_types::Error;

use crate::model::{Coordinate, Waypoint};

/// Source of named locations (a gazetteer)
pub trait LocationRepository {
    /// Resolve a location name; None when the name is not known
    fn find_by_name(&self, name: &str) -> Result<Option<Coordinate>, Error>;

    /// All known locations
    fn find_all(&self) -> Result<Vec<Waypoint>, Error>;
}

/// Normalize a location name for lookup ("  Chicago, IL " -> "chicago, il")
pub fn normalize_location_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
