//! Repository adapters for the persistence layer

use std::path::PathBuf;

use tripcheck_infra::persistence::FileLocationRepository;
use tripcheck_types::Result;

use crate::app::LocationResolver;
use crate::config::Config;

/// Open the user gazetteer named in the config, if any
pub fn open_location_repo(config: &Config) -> Result<Option<FileLocationRepository>> {
    config
        .gazetteer_path
        .clone()
        .map(open_location_repo_at)
        .transpose()
}

/// Open a gazetteer file (CSV or TOML)
pub fn open_location_repo_at(path: PathBuf) -> Result<FileLocationRepository> {
    FileLocationRepository::new(path)
}

/// Resolver over the user gazetteer (when configured) and the built-in cities
pub fn open_resolver(config: &Config) -> Result<LocationResolver> {
    let resolver = LocationResolver::new();
    Ok(match open_location_repo(config)? {
        Some(repo) => {
            tracing::debug!(path = %repo.path().display(), "using user gazetteer");
            resolver.with_source(Box::new(repo))
        }
        None => resolver,
    })
}
