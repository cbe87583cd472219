//! Carousel role projection
//!
//! Pure function of (catalog, selection). Rendering reads the resulting
//! `CarouselView`; nothing here is stored between mutations.

use serde::Serialize;
use yuno_types::FleetFilter;

use crate::model::Catalog;
use crate::service::fleet_state::{visible_indices, Selection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NeighborSide {
    Left,
    Right,
    /// Two visible cards: the other card sits on both sides
    Both,
}

/// Visual role of one card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "role", content = "side", rename_all = "snake_case")]
pub enum CardRole {
    Active,
    Neighbor(NeighborSide),
    /// Passes the filter but is neither active nor adjacent
    Hidden,
    FilteredOut,
}

impl CardRole {
    pub fn is_left(&self) -> bool {
        matches!(
            self,
            CardRole::Neighbor(NeighborSide::Left | NeighborSide::Both)
        )
    }

    pub fn is_right(&self) -> bool {
        matches!(
            self,
            CardRole::Neighbor(NeighborSide::Right | NeighborSide::Both)
        )
    }

    /// Single side to place a neighbor on. Right wins when both apply.
    pub fn placement(&self) -> Option<NeighborSide> {
        match self {
            CardRole::Neighbor(NeighborSide::Left) => Some(NeighborSide::Left),
            CardRole::Neighbor(_) => Some(NeighborSide::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: String,
    pub catalog_index: usize,
    /// Position in the visible subsequence, `None` when filtered out
    pub visible_index: Option<usize>,
    pub role: CardRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarouselView {
    pub filter: FleetFilter,
    /// Every catalog card, in catalog order
    pub cards: Vec<CardView>,
    pub visible_count: usize,
    pub active_index: Option<usize>,
}

impl CarouselView {
    pub fn is_empty(&self) -> bool {
        self.visible_count == 0
    }

    pub fn active(&self) -> Option<&CardView> {
        self.cards.iter().find(|c| c.role == CardRole::Active)
    }

    pub fn role_of(&self, id: &str) -> Option<CardRole> {
        self.cards.iter().find(|c| c.id == id).map(|c| c.role)
    }

    /// Cards passing the filter, in visible order
    pub fn visible(&self) -> impl Iterator<Item = &CardView> {
        self.cards.iter().filter(|c| c.visible_index.is_some())
    }
}

/// Assign a role to every catalog card for the given selection
pub fn project(catalog: &Catalog, selection: &Selection) -> CarouselView {
    let visible = visible_indices(catalog, &selection.filter);
    let count = visible.len();

    let mut visible_roles = vec![CardRole::Hidden; count];
    let active_index = if count == 0 {
        None
    } else {
        let active = selection.active_index.unwrap_or(0) % count;
        visible_roles[active] = CardRole::Active;
        if count > 1 {
            let left = (active + count - 1) % count;
            let right = (active + 1) % count;
            visible_roles[left] = CardRole::Neighbor(NeighborSide::Left);
            visible_roles[right] = if right == left {
                CardRole::Neighbor(NeighborSide::Both)
            } else {
                CardRole::Neighbor(NeighborSide::Right)
            };
        }
        Some(active)
    };

    let mut roles = vec![(None, CardRole::FilteredOut); catalog.len()];
    for (visible_index, &pos) in visible.iter().enumerate() {
        roles[pos] = (Some(visible_index), visible_roles[visible_index]);
    }

    let cards = catalog
        .iter()
        .zip(roles)
        .enumerate()
        .map(|(catalog_index, (vehicle, (visible_index, role)))| CardView {
            id: vehicle.id.clone(),
            catalog_index,
            visible_index,
            role,
        })
        .collect();

    CarouselView {
        filter: selection.filter.clone(),
        cards,
        visible_count: count,
        active_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CardDescriptor;
    use crate::service::{build_catalog, FleetState};
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

    fn view(state: &FleetState) -> CarouselView {
        project(state.catalog(), state.selection())
    }

    fn roles(view: &CarouselView) -> Vec<CardRole> {
        view.cards.iter().map(|c| c.role).collect()
    }

    #[test]
    fn test_five_cards() {
        let mut state = fleet(&["bike"; 5]);
        state.jump_to(2).unwrap();
        assert_eq!(
            roles(&view(&state)),
            vec![
                CardRole::Hidden,
                CardRole::Neighbor(NeighborSide::Left),
                CardRole::Active,
                CardRole::Neighbor(NeighborSide::Right),
                CardRole::Hidden,
            ]
        );
    }

    #[test]
    fn test_neighbors_wrap_around() {
        let state = fleet(&["bike"; 4]);
        assert_eq!(
            roles(&view(&state)),
            vec![
                CardRole::Active,
                CardRole::Neighbor(NeighborSide::Right),
                CardRole::Hidden,
                CardRole::Neighbor(NeighborSide::Left),
            ]
        );
    }

    #[test]
    fn test_single_card_has_no_neighbors() {
        let state = fleet(&["bike"]);
        let view = view(&state);
        assert_eq!(roles(&view), vec![CardRole::Active]);
        assert_eq!(view.active_index, Some(0));
    }

    #[test]
    fn test_two_cards_share_neighbor() {
        let mut state = fleet(&["bike", "bike"]);
        for _ in 0..2 {
            let view = view(&state);
            let active: Vec<_> = view
                .cards
                .iter()
                .filter(|c| c.role == CardRole::Active)
                .collect();
            assert_eq!(active.len(), 1);
            let other = view.cards.iter().find(|c| c.role != CardRole::Active).unwrap();
            assert!(other.role.is_left());
            assert!(other.role.is_right());
            assert_eq!(other.role.placement(), Some(NeighborSide::Right));
            assert!(view.cards.iter().all(|c| c.role != CardRole::Hidden));
            state.next();
        }
    }

    #[test]
    fn test_filtered_out_cards() {
        let mut state = fleet(&["bike", "scooty", "bike", "scooty"]);
        state.set_filter(FleetFilter::Only(VehicleType::Scooty));
        let view = view(&state);
        assert_eq!(view.visible_count, 2);
        assert_eq!(view.role_of("v0"), Some(CardRole::FilteredOut));
        assert_eq!(view.role_of("v1"), Some(CardRole::Active));
        assert_eq!(view.role_of("v2"), Some(CardRole::FilteredOut));
        assert!(view.role_of("v3").unwrap().is_right());
        assert_eq!(view.cards[3].visible_index, Some(1));
    }

    #[test]
    fn test_empty_view() {
        let mut state = fleet(&["bike"]);
        state.set_filter(FleetFilter::Only(VehicleType::Scooty));
        let view = view(&state);
        assert!(view.is_empty());
        assert!(view.active().is_none());
        assert_eq!(roles(&view), vec![CardRole::FilteredOut]);
    }

    #[test]
    fn test_out_of_range_index_is_normalized() {
        let state = fleet(&["bike"; 3]);
        let selection = Selection {
            filter: FleetFilter::All,
            active_index: Some(7),
        };
        let view = project(state.catalog(), &selection);
        assert_eq!(view.active_index, Some(1));
        assert_eq!(view.active().unwrap().id, "v1");
    }
}
