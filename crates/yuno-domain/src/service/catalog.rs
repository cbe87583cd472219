//! Catalog builder: card descriptors to vehicle records

use std::collections::HashSet;

use tracing::{debug, warn};
use yuno_types::VehicleType;

use crate::model::{CardDescriptor, Catalog, RawValue, VehicleRecord};

/// Build the session catalog from card descriptors in document order.
///
/// Cards without an id are skipped. When an id repeats, the first card wins.
pub fn build_catalog(descriptors: &[CardDescriptor]) -> Catalog {
    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(descriptors.len());

    for (position, card) in descriptors.iter().enumerate() {
        let id = match card.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => {
                warn!(position, "skipping vehicle card without an id");
                continue;
            }
        };
        if !seen.insert(id.clone()) {
            warn!(%id, position, "duplicate vehicle id, keeping the first card");
            continue;
        }
        records.push(to_record(id, card));
    }

    debug!(
        cards = descriptors.len(),
        vehicles = records.len(),
        "catalog built"
    );
    Catalog::from_records(records)
}

fn to_record(id: String, card: &CardDescriptor) -> VehicleRecord {
    let vehicle_type = card
        .vehicle_type
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| VehicleType::from(t.to_string()));
    let daily_rate = rate(&id, "day", card.day.as_ref());
    let weekly_rate = rate(&id, "week", card.week.as_ref());
    let available = !card.available.as_ref().is_some_and(RawValue::is_false);

    VehicleRecord {
        name: text(&card.name),
        subtitle: text(&card.subtitle),
        description: text(&card.description),
        id,
        vehicle_type,
        daily_rate,
        weekly_rate,
        available,
    }
}

fn rate(id: &str, field: &str, raw: Option<&RawValue>) -> u64 {
    match raw.map(RawValue::to_rate) {
        None => 0,
        Some(Ok(value)) => value,
        Some(Err(bad)) => {
            warn!(%id, field, value = %bad, "unusable rate, treating as 0");
            0
        }
    }
}

fn text(value: &Option<String>) -> String {
    value.as_deref().map(str::trim).unwrap_or_default().to_string()
}
