//! Global key listener registry for carousel navigation

use tracing::debug;

use crate::service::fleet_state::{FleetEvent, FleetState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Next,
    Previous,
}

impl NavKey {
    /// Map a key name (`KeyboardEvent.key` style) to a navigation step
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(NavKey::Next),
            "ArrowLeft" => Some(NavKey::Previous),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyHandler {
    CarouselNavigation,
}

/// Document-level key listeners.
///
/// Attaching the carousel listener is idempotent so a key press never steps
/// twice.
#[derive(Debug, Default)]
pub struct KeyRegistry {
    handlers: Vec<KeyHandler>,
}

impl KeyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the listener was already attached
    pub fn attach_carousel(&mut self) -> bool {
        if self.is_attached() {
            return false;
        }
        self.handlers.push(KeyHandler::CarouselNavigation);
        debug!("carousel keyboard listener attached");
        true
    }

    pub fn is_attached(&self) -> bool {
        self.handlers.contains(&KeyHandler::CarouselNavigation)
    }

    pub fn listener_count(&self) -> usize {
        self.handlers.len()
    }

    /// Deliver one key press to every attached listener
    pub fn dispatch(&self, key: &str, state: &mut FleetState) -> Vec<FleetEvent> {
        let Some(nav) = NavKey::from_key_name(key) else {
            return Vec::new();
        };
        self.handlers
            .iter()
            .map(|handler| match handler {
                KeyHandler::CarouselNavigation => match nav {
                    NavKey::Next => state.next(),
                    NavKey::Previous => state.prev(),
                },
            })
            .collect()
    }
}
