//! Filter and selection state machine for the fleet carousel
//!
//! `FleetState` is the only owner of the active filter and index. Every
//! operation leaves the index valid for the current filter, or `None` when
//! nothing is visible.

use serde::Serialize;
use tracing::debug;
use yuno_types::{FleetError, FleetFilter};

use crate::model::{Catalog, VehicleRecord};

/// Active filter and position within its visible subsequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub filter: FleetFilter,
    /// Index into the visible subsequence; `None` when it is empty
    pub active_index: Option<usize>,
}

/// Outcome of a state transition, consumed by presentation adapters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FleetEvent {
    /// The visible subsequence was recomputed (filter change)
    VisibilityChanged {
        visible: usize,
        active: Option<usize>,
    },
    /// The active card moved within an unchanged visible set
    ActiveChanged { index: usize },
    /// Nothing is visible; navigation is a no-op
    Empty,
}

/// Catalog positions passing `filter`, in catalog order
pub fn visible_indices(catalog: &Catalog, filter: &FleetFilter) -> Vec<usize> {
    catalog
        .iter()
        .enumerate()
        .filter(|(_, v)| filter.matches(v.vehicle_type.as_ref()))
        .map(|(i, _)| i)
        .collect()
}

#[derive(Debug, Clone)]
pub struct FleetState {
    catalog: Catalog,
    selection: Selection,
    visible: Vec<usize>,
}

impl FleetState {
    /// Start on the unfiltered view with the first card active
    pub fn new(catalog: Catalog) -> Self {
        let filter = FleetFilter::All;
        let visible = visible_indices(&catalog, &filter);
        let active_index = if visible.is_empty() { None } else { Some(0) };
        Self {
            catalog,
            selection: Selection {
                filter,
                active_index,
            },
            visible,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn filter(&self) -> &FleetFilter {
        &self.selection.filter
    }

    pub fn active_index(&self) -> Option<usize> {
        self.selection.active_index
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Catalog positions of the visible subsequence
    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    pub fn active_vehicle(&self) -> Option<&VehicleRecord> {
        let index = self.selection.active_index?;
        self.visible
            .get(index)
            .and_then(|&pos| self.catalog.get(pos))
    }

    /// Switch filter and re-point at the first visible card
    pub fn set_filter(&mut self, filter: FleetFilter) -> FleetEvent {
        self.visible = visible_indices(&self.catalog, &filter);
        self.selection.filter = filter;
        self.selection.active_index = if self.visible.is_empty() {
            None
        } else {
            Some(0)
        };
        debug!(
            filter = %self.selection.filter,
            visible = self.visible.len(),
            "filter applied"
        );
        FleetEvent::VisibilityChanged {
            visible: self.visible.len(),
            active: self.selection.active_index,
        }
    }

    pub fn next(&mut self) -> FleetEvent {
        self.step(1)
    }

    pub fn prev(&mut self) -> FleetEvent {
        self.step(-1)
    }

    fn step(&mut self, delta: isize) -> FleetEvent {
        let count = self.visible.len();
        if count == 0 {
            return FleetEvent::Empty;
        }
        let current = self.selection.active_index.unwrap_or(0) as isize;
        let index = (current + delta).rem_euclid(count as isize) as usize;
        self.activate(index)
    }

    /// Jump straight to a visible position (dot click)
    pub fn jump_to(&mut self, index: usize) -> Result<FleetEvent, FleetError> {
        let visible = self.visible.len();
        if index >= visible {
            return Err(FleetError::OutOfRange { index, visible });
        }
        Ok(self.activate(index))
    }

    /// Center the carousel on a vehicle within the current filter.
    ///
    /// Fails without moving when the id is unknown or filtered out.
    pub fn select_by_id(&mut self, vehicle_id: &str) -> Result<FleetEvent, FleetError> {
        let index = self
            .visible
            .iter()
            .position(|&pos| {
                self.catalog
                    .get(pos)
                    .is_some_and(|v| v.id == vehicle_id)
            })
            .ok_or_else(|| FleetError::NotFound(vehicle_id.to_string()))?;
        Ok(self.activate(index))
    }

    fn activate(&mut self, index: usize) -> FleetEvent {
        self.selection.active_index = Some(index);
        debug!(index, "active card changed");
        FleetEvent::ActiveChanged { index }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CardDescriptor;
    use crate::service::build_catalog;
    use yuno_types::VehicleType;

    fn fleet(types: &[&str]) -> FleetState {
        let cards: Vec<_> = types
            .iter()
            .enumerate()
            .map(|(i, t)| CardDescriptor {
                id: Some(format!("v{}", i)),
                vehicle_type: Some(t.to_string()),
                name: Some(format!("Vehicle {}", i)),
                ..Default::default()
            })
            .collect();
        FleetState::new(build_catalog(&cards))
    }

    fn bikes() -> FleetFilter {
        FleetFilter::Only(VehicleType::Bike)
    }

    #[test]
    fn test_initial_state() {
        let state = fleet(&["bike", "scooty"]);
        assert_eq!(state.filter(), &FleetFilter::All);
        assert_eq!(state.active_index(), Some(0));
        assert_eq!(state.visible_count(), 2);
    }

    #[test]
    fn test_empty_catalog_has_no_active() {
        let mut state = fleet(&[]);
        assert_eq!(state.active_index(), None);
        assert_eq!(state.next(), FleetEvent::Empty);
        assert_eq!(state.prev(), FleetEvent::Empty);
        assert_eq!(state.active_index(), None);
    }

    #[test]
    fn test_filter_counts() {
        let mut state = fleet(&["bike", "scooty", "bike", "scooty", "scooty"]);
        state.set_filter(FleetFilter::All);
        assert_eq!(state.visible_count(), 5);
        state.set_filter(bikes());
        assert_eq!(state.visible_count(), 2);
        state.set_filter(FleetFilter::Only(VehicleType::Scooty));
        assert_eq!(state.visible_count(), 3);
    }

    #[test]
    fn test_set_filter_resets_index() {
        let mut state = fleet(&["bike", "scooty", "bike"]);
        state.next();
        state.next();
        assert_eq!(state.active_index(), Some(2));
        let event = state.set_filter(bikes());
        assert_eq!(
            event,
            FleetEvent::VisibilityChanged {
                visible: 2,
                active: Some(0)
            }
        );
        assert_eq!(state.active_vehicle().unwrap().id, "v0");
    }

    #[test]
    fn test_filter_to_nothing_is_empty_state() {
        let mut state = fleet(&["bike", "bike"]);
        let event = state.set_filter(FleetFilter::Only(VehicleType::Scooty));
        assert_eq!(
            event,
            FleetEvent::VisibilityChanged {
                visible: 0,
                active: None
            }
        );
        assert_eq!(state.next(), FleetEvent::Empty);
        assert!(state.active_vehicle().is_none());
    }

    #[test]
    fn test_wraparound() {
        let mut state = fleet(&["bike", "bike", "bike"]);
        state.prev();
        assert_eq!(state.active_index(), Some(2));
        state.next();
        assert_eq!(state.active_index(), Some(0));
    }

    #[test]
    fn test_next_prev_round_trip() {
        for count in 1..6 {
            let types = vec!["bike"; count];
            let mut state = fleet(&types);
            for start in 0..count {
                state.jump_to(start).unwrap();
                state.next();
                state.prev();
                assert_eq!(state.active_index(), Some(start));
            }
        }
    }

    #[test]
    fn test_index_stays_in_range() {
        let mut state = fleet(&["bike", "scooty", "bike", "scooty", "bike"]);
        let ops = [0, 1, 1, 2, 0, 0, 0, 3, 1, 2, 1, 1, 0, 3, 0];
        for op in ops {
            match op {
                0 => {
                    state.next();
                }
                1 => {
                    state.prev();
                }
                2 => {
                    state.set_filter(bikes());
                }
                _ => {
                    state.set_filter(FleetFilter::All);
                }
            }
            let index = state.active_index().unwrap();
            assert!(index < state.visible_count());
        }
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut state = fleet(&["bike", "bike"]);
        state.next();
        let err = state.jump_to(2).unwrap_err();
        assert_eq!(err, FleetError::OutOfRange { index: 2, visible: 2 });
        assert_eq!(state.active_index(), Some(1));
    }

    #[test]
    fn test_select_by_id() {
        let mut state = fleet(&["bike", "scooty", "bike"]);
        state.set_filter(bikes());
        assert_eq!(
            state.select_by_id("v2"),
            Ok(FleetEvent::ActiveChanged { index: 1 })
        );
    }

    #[test]
    fn test_select_unknown_or_filtered_out() {
        let mut state = fleet(&["bike", "scooty", "bike"]);
        state.next();
        assert_eq!(
            state.select_by_id("unknown-id"),
            Err(FleetError::NotFound("unknown-id".to_string()))
        );
        assert_eq!(state.active_index(), Some(1));

        state.set_filter(bikes());
        assert!(state.select_by_id("v1").is_err());
        assert_eq!(state.active_index(), Some(0));
    }
}
