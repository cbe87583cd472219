//! Domain services

pub mod carousel;
pub mod catalog;
pub mod dots;
pub mod fleet_state;
pub mod keyboard;
pub mod quote_calculator;

pub use carousel::{project, CardRole, CardView, CarouselView, NeighborSide};
pub use catalog::build_catalog;
pub use dots::{DotIndicator, DotSync};
pub use fleet_state::{visible_indices, FleetEvent, FleetState, Selection};
pub use keyboard::{KeyRegistry, NavKey};
pub use quote_calculator::{
    auto_return, auto_return_in, compute_auto_quote, compute_quote, estimate_total, rental_days,
    QuoteConfig,
};
