//! Shared value types for the fleet catalog

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Vehicle category tag carried by each card (`data-type`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VehicleType {
    Bike,
    Scooty,
    /// Any other declared tag, kept verbatim so it can still be filtered on
    Other(String),
}

impl VehicleType {
    pub fn as_str(&self) -> &str {
        match self {
            VehicleType::Bike => "bike",
            VehicleType::Scooty => "scooty",
            VehicleType::Other(tag) => tag,
        }
    }

    /// Human label used in the vehicle dropdown and booking message
    pub fn label(&self) -> &'static str {
        match self {
            VehicleType::Bike => "Bike",
            _ => "Scooty",
        }
    }
}

impl From<String> for VehicleType {
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "bike" => VehicleType::Bike,
            "scooty" => VehicleType::Scooty,
            other => VehicleType::Other(other.to_string()),
        }
    }
}

impl From<VehicleType> for String {
    fn from(value: VehicleType) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for VehicleType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(VehicleType::from(s.to_string()))
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Active carousel filter: everything, or one vehicle type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FleetFilter {
    #[default]
    All,
    Only(VehicleType),
}

impl FleetFilter {
    pub fn matches(&self, vehicle_type: Option<&VehicleType>) -> bool {
        match self {
            FleetFilter::All => true,
            FleetFilter::Only(wanted) => vehicle_type == Some(wanted),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FleetFilter::All => "all",
            FleetFilter::Only(t) => t.as_str(),
        }
    }
}

impl From<String> for FleetFilter {
    fn from(raw: String) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            FleetFilter::All
        } else {
            FleetFilter::Only(VehicleType::from(trimmed.to_string()))
        }
    }
}

impl From<FleetFilter> for String {
    fn from(value: FleetFilter) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for FleetFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FleetFilter::from(s.to_string()))
    }
}

impl fmt::Display for FleetFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
