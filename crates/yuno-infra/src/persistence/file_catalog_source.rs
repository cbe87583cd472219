//! File-based implementation of CatalogSource

use std::path::{Path, PathBuf};

use yuno_domain::model::CardDescriptor;
use yuno_domain::repository::CatalogSource;
use yuno_types::Error;

use crate::catalog_loader::{self, CatalogFormat};

/// Fleet catalog read from a TOML, JSON or CSV file
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
    format: CatalogFormat,
}

impl FileCatalogSource {
    /// Create a source, detecting the format from the extension
    pub fn new(path: PathBuf) -> Result<Self, Error> {
        let format = CatalogFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> CatalogFormat {
        self.format
    }
}

impl CatalogSource for FileCatalogSource {
    fn load_descriptors(&self) -> Result<Vec<CardDescriptor>, Error> {
        catalog_loader::load_from_file(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;
    use yuno_types::CatalogError;

    #[test]
    fn test_load_catalog_from_toml_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fleet.toml");
        fs::write(
            &path,
            r#"
[[vehicles]]
id = "classic-350"
type = "bike"
day = 900
week = 5500
name = "Royal Enfield Classic 350"

[[vehicles]]
id = "classic-350"
type = "bike"
name = "Duplicate"

[[vehicles]]
type = "scooty"
name = "No id"
"#,
        )
        .unwrap();

        let source = FileCatalogSource::new(path).unwrap();
        assert_eq!(source.format(), CatalogFormat::Toml);
        assert_eq!(source.load_descriptors().unwrap().len(), 3);

        let catalog = source.load_catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        let bike = catalog.get(0).unwrap();
        assert_eq!(bike.name, "Royal Enfield Classic 350");
        assert_eq!(bike.weekly_rate, 5500);
    }

    #[test]
    fn test_load_catalog_from_csv_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fleet.csv");
        fs::write(&path, "id,type,day,name\nntorq,scooty,420,TVS Ntorq\n").unwrap();

        let catalog = FileCatalogSource::new(path).unwrap().load_catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().daily_rate, 420);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let source = FileCatalogSource::new(dir.path().join("missing.json")).unwrap();
        let err = source.load_descriptors().unwrap_err();
        assert!(matches!(err, Error::Catalog(CatalogError::Read { .. })));
    }
}
