//! Repository trait definitions for catalog input

use yuno_types::Error;

use crate::model::{CardDescriptor, Catalog};
use crate::service::build_catalog;

/// Source of vehicle card descriptors, read once per session
pub trait CatalogSource {
    /// Load raw card descriptors in document order
    fn load_descriptors(&self) -> Result<Vec<CardDescriptor>, Error>;

    /// Load descriptors and build the session catalog
    fn load_catalog(&self) -> Result<Catalog, Error> {
        Ok(build_catalog(&self.load_descriptors()?))
    }
}

/// In-memory source for embedded fleets
impl CatalogSource for Vec<CardDescriptor> {
    fn load_descriptors(&self) -> Result<Vec<CardDescriptor>, Error> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawValue;

    fn card(id: &str, name: &str) -> CardDescriptor {
        CardDescriptor {
            id: Some(id.to_string()),
            vehicle_type: Some("bike".to_string()),
            day: Some(RawValue::from("500")),
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_in_memory_source_builds_catalog() {
        let source = vec![card("a", "First"), card("b", "Second"), card("a", "Again")];
        assert_eq!(source.load_descriptors().unwrap().len(), 3);

        let catalog = source.load_catalog().unwrap();
        let names: Vec<_> = catalog.records().iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
        assert_eq!(catalog.records()[1].daily_rate, 500);
    }
}
