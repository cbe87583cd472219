//! Infrastructure layer - catalog file loaders and sources

pub mod catalog_loader;
pub mod persistence;
