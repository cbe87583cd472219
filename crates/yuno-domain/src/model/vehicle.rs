//! Vehicle records and the session catalog

use serde::Serialize;
use yuno_types::VehicleType;

/// A vehicle as listed on the fleet page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleRecord {
    pub id: String,
    pub vehicle_type: Option<VehicleType>,
    pub name: String,
    pub subtitle: String,
    pub description: String,
    /// Whole currency units per day
    pub daily_rate: u64,
    /// Whole currency units per 7-day block; 0 means no weekly tier
    pub weekly_rate: u64,
    pub available: bool,
}

impl VehicleRecord {
    /// Usable for booking: listed as available and carrying a name
    pub fn is_selectable(&self) -> bool {
        self.available && !self.name.trim().is_empty()
    }

    pub fn has_weekly_tier(&self) -> bool {
        self.weekly_rate > 0
    }

    pub fn type_label(&self) -> &'static str {
        self.vehicle_type
            .as_ref()
            .map(VehicleType::label)
            .unwrap_or("Scooty")
    }
}

/// Ordered, read-only list of vehicles for one session.
///
/// Order is document order and defines the default carousel order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    records: Vec<VehicleRecord>,
}

impl Catalog {
    pub(crate) fn from_records(records: Vec<VehicleRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&VehicleRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VehicleRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[VehicleRecord] {
        &self.records
    }

    /// Look up a vehicle by id, returning its catalog position too
    pub fn find(&self, id: &str) -> Option<(usize, &VehicleRecord)> {
        self.records.iter().enumerate().find(|(_, v)| v.id == id)
    }

    /// Vehicles offered in the booking dropdown, in catalog order
    pub fn selectable(&self) -> Vec<&VehicleRecord> {
        self.records.iter().filter(|v| v.is_selectable()).collect()
    }
}
