//! File-based implementations of the repository traits

mod file_catalog_source;

pub use file_catalog_source::FileCatalogSource;
