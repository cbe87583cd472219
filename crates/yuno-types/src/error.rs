//! Error types for yuno-ride

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Catalog source errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    #[error("No catalog configured (use --catalog or `config --set-catalog`)")]
    NotConfigured,
}

/// Carousel selection errors. An empty visible set is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FleetError {
    #[error("Vehicle not found: {0}")]
    NotFound(String),

    #[error("Index {index} is out of range for {visible} visible vehicles")]
    OutOfRange { index: usize, visible: usize },
}

/// Rental quote errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Return date is before pickup date")]
    ReturnBeforePickup,
}

/// Booking form validation errors.
///
/// The display text doubles as the status line shown next to the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Please enter your full name.")]
    MissingName,

    #[error("Please enter your phone number.")]
    MissingPhone,

    #[error("Please select both pickup and return dates.")]
    MissingDates,

    #[error("Pickup date cannot be earlier than today.")]
    PickupBeforeToday,

    #[error("Invalid rental duration.")]
    InvalidDuration(#[source] QuoteError),

    #[error("Please select a vehicle.")]
    MissingVehicle,

    #[error("Vehicle not found.")]
    VehicleNotFound(String),

    #[error("Vehicle is not available for booking.")]
    VehicleUnavailable(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Fleet error: {0}")]
    Fleet(#[from] FleetError),

    #[error("Quote error: {0}")]
    Quote(#[from] QuoteError),

    #[error("Booking error: {0}")]
    Booking(#[from] BookingError),
}

pub type Result<T> = std::result::Result<T, Error>;
