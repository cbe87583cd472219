//! Domain model types

pub mod card;
pub mod quote;
pub mod vehicle;

pub use card::{CardDescriptor, RawValue};
pub use quote::{Quote, RentalPoint};
pub use vehicle::{Catalog, VehicleRecord};
