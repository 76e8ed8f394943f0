//! Infrastructure layer - file loaders and repository implementations

pub mod gazetteer_csv;
pub mod location_loader;
pub mod persistence;
pub mod trips_csv;
