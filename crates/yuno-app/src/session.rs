//! Fleet session: the presentation-side owner of carousel state
//!
//! Routes user actions (filter pills, arrows, dots, keys, "book this")
//! into `FleetState` and keeps the dot row in step with each outcome.

use serde::Serialize;
use tracing::debug;
use yuno_domain::model::{Catalog, VehicleRecord};
use yuno_domain::service::{
    project, CarouselView, DotIndicator, DotSync, FleetEvent, FleetState, KeyRegistry,
};
use yuno_types::{FleetError, FleetFilter};

/// Entry in the booking vehicle dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleOption {
    pub id: String,
    pub label: String,
}

impl From<&VehicleRecord> for VehicleOption {
    fn from(vehicle: &VehicleRecord) -> Self {
        Self {
            id: vehicle.id.clone(),
            label: format!("{} ({})", vehicle.name, vehicle.type_label()),
        }
    }
}

/// Filter choices offered by the pills: `all` plus each type in catalog order
pub fn filter_options(catalog: &Catalog) -> Vec<FleetFilter> {
    let mut options = vec![FleetFilter::All];
    for vehicle in catalog.iter() {
        if let Some(t) = &vehicle.vehicle_type {
            let option = FleetFilter::Only(t.clone());
            if !options.contains(&option) {
                options.push(option);
            }
        }
    }
    options
}

pub struct FleetSession {
    state: FleetState,
    dots: DotIndicator,
    keys: KeyRegistry,
    booking_vehicle: Option<String>,
    last_dot_sync: DotSync,
}

impl FleetSession {
    pub fn new(catalog: Catalog) -> Self {
        let state = FleetState::new(catalog);
        let mut dots = DotIndicator::new();
        let last_dot_sync = dots.sync(state.visible_count(), state.active_index());
        Self {
            state,
            dots,
            keys: KeyRegistry::new(),
            booking_vehicle: None,
            last_dot_sync,
        }
    }

    pub fn state(&self) -> &FleetState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        self.state.catalog()
    }

    pub fn dots(&self) -> &DotIndicator {
        &self.dots
    }

    pub fn last_dot_sync(&self) -> DotSync {
        self.last_dot_sync
    }

    pub fn view(&self) -> CarouselView {
        project(self.state.catalog(), self.state.selection())
    }

    /// Whether the "no vehicles match" banner should show
    pub fn is_empty(&self) -> bool {
        self.state.visible_count() == 0
    }

    /// Vehicle pre-selected in the booking form, if any
    pub fn booking_vehicle(&self) -> Option<&str> {
        self.booking_vehicle.as_deref()
    }

    pub fn vehicle_options(&self) -> Vec<VehicleOption> {
        self.catalog()
            .selectable()
            .into_iter()
            .map(VehicleOption::from)
            .collect()
    }

    /// Filter pill or header shortcut; both share one active marker
    pub fn set_filter(&mut self, filter: FleetFilter) -> FleetEvent {
        let event = self.state.set_filter(filter);
        self.sync_dots(event)
    }

    pub fn next(&mut self) -> FleetEvent {
        let event = self.state.next();
        self.sync_dots(event)
    }

    pub fn prev(&mut self) -> FleetEvent {
        let event = self.state.prev();
        self.sync_dots(event)
    }

    pub fn click_dot(&mut self, index: usize) -> Result<FleetEvent, FleetError> {
        let event = self.state.jump_to(index)?;
        Ok(self.sync_dots(event))
    }

    /// "Book this" on a card: center it and pre-select it for booking.
    ///
    /// A card hidden by the current filter clears the filter first.
    pub fn book_from_card(&mut self, vehicle_id: &str) -> Result<FleetEvent, FleetError> {
        let (_, vehicle) = self
            .catalog()
            .find(vehicle_id)
            .ok_or_else(|| FleetError::NotFound(vehicle_id.to_string()))?;
        let selectable = vehicle.is_selectable();

        let event = match self.state.select_by_id(vehicle_id) {
            Ok(event) => event,
            Err(FleetError::NotFound(_)) => {
                debug!(vehicle = vehicle_id, "card filtered out, clearing filter");
                self.set_filter(FleetFilter::All);
                self.state.select_by_id(vehicle_id)?
            }
            Err(e) => return Err(e),
        };

        self.booking_vehicle = selectable.then(|| vehicle_id.to_string());
        Ok(self.sync_dots(event))
    }

    /// Attach the document key listener; repeat calls are ignored
    pub fn attach_keyboard(&mut self) -> bool {
        self.keys.attach_carousel()
    }

    pub fn press_key(&mut self, key: &str) -> Vec<FleetEvent> {
        let events = self.keys.dispatch(key, &mut self.state);
        for event in &events {
            self.sync_dots(*event);
        }
        events
    }

    fn sync_dots(&mut self, event: FleetEvent) -> FleetEvent {
        self.last_dot_sync = self
            .dots
            .sync(self.state.visible_count(), self.state.active_index());
        event
    }
}
