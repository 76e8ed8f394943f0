//! Built-in reference data

pub mod cities;

pub use cities::{builtin_locations, get_city, BuiltinGazetteer};
