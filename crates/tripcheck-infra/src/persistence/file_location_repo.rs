//! File-based implementation of LocationRepository

use std::path::PathBuf;

use tripcheck_domain::model::{Coordinate, Waypoint};
use tripcheck_domain::repository::LocationRepository;
use tripcheck_types::Error;

use crate::location_loader::LocationLoader;

/// Gazetteer backed by a CSV or TOML file
pub struct FileLocationRepository {
    path: PathBuf,
    loader: LocationLoader,
}

impl FileLocationRepository {
    pub fn new(path: PathBuf) -> Result<Self, Error> {
        let loader = LocationLoader::load_from_file(&path)?;
        Ok(Self { path, loader })
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl LocationRepository for FileLocationRepository {
    fn find_by_name(&self, name: &str) -> Result<Option<Coordinate>, Error> {
        Ok(self.loader.get(name).map(|w| w.coordinate))
    }

    fn find_all(&self) -> Result<Vec<Waypoint>, Error> {
        Ok(self.loader.all_locations().into_iter().cloned().collect())
    }
}
