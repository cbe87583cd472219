//! Catalog source wiring

use std::path::PathBuf;

use yuno_domain::model::Catalog;
use yuno_domain::repository::CatalogSource;
use yuno_infra::persistence::FileCatalogSource;
use yuno_types::{CatalogError, Result};

use crate::config::Config;

/// Open the fleet catalog file, preferring an explicit path over config
pub fn open_catalog_source(config: &Config, path: Option<PathBuf>) -> Result<FileCatalogSource> {
    let path = path
        .or_else(|| config.catalog_path.clone())
        .ok_or(CatalogError::NotConfigured)?;
    FileCatalogSource::new(path)
}

/// Load and build the session catalog
pub fn load_catalog(config: &Config, path: Option<PathBuf>) -> Result<Catalog> {
    open_catalog_source(config, path)?.load_catalog()
}

#[cfg(test)]
mod tests {
    use super::*;
    use yuno_types::Error;

    #[test]
    fn test_requires_some_catalog_path() {
        let err = open_catalog_source(&Config::default(), None).unwrap_err();
        assert!(matches!(err, Error::Catalog(CatalogError::NotConfigured)));
    }

    #[test]
    fn test_explicit_path_wins() {
        let config = Config {
            catalog_path: Some(PathBuf::from("configured.toml")),
            ..Config::default()
        };
        let source = open_catalog_source(&config, Some(PathBuf::from("cli.json"))).unwrap();
        assert_eq!(source.path(), PathBuf::from("cli.json").as_path());
    }
}
