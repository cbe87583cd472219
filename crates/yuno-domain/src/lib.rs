//! Domain models, services, and repository traits for the rental fleet

pub mod model;
pub mod repository;
pub mod service;
