//! Persistence implementations
//!
//! File-based implementations of the repository traits.

mod file_location_repo;

pub use file_location_repo::FileLocationRepository;
