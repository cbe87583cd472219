//! Plain-text rendering of the fleet carousel

use yuno_domain::model::Catalog;
use yuno_domain::service::{CardRole, CarouselView, DotIndicator, NeighborSide};

use crate::format::format_inr;
use crate::session::{filter_options, FleetSession};

pub const EMPTY_BANNER: &str = "No vehicles match this filter.";

fn role_marker(role: CardRole) -> &'static str {
    match role {
        CardRole::Active => "[*]",
        CardRole::Neighbor(_) => match role.placement() {
            Some(NeighborSide::Left) => " < ",
            _ => " > ",
        },
        CardRole::Hidden => " . ",
        CardRole::FilteredOut => "   ",
    }
}

/// Filter pills with the active one bracketed
pub fn render_filter_bar(catalog: &Catalog, view: &CarouselView) -> String {
    filter_options(catalog)
        .iter()
        .map(|f| {
            if *f == view.filter {
                format!("[{}]", f)
            } else {
                f.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// `● ○ ○` with the current dot filled
pub fn render_dots(dots: &DotIndicator) -> String {
    dots.dots()
        .iter()
        .map(|&current| if current { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_carousel(catalog: &Catalog, view: &CarouselView, dots: &DotIndicator) -> String {
    let mut out = String::new();
    out.push_str(&format!("Filter: {}\n", render_filter_bar(catalog, view)));
    out.push_str(&"-".repeat(60));
    out.push('\n');

    if view.is_empty() {
        out.push_str(EMPTY_BANNER);
        out.push('\n');
        return out;
    }

    for card in view.visible() {
        let Some(vehicle) = catalog.get(card.catalog_index) else {
            continue;
        };
        let mut line = format!(
            "{} {:<28} {:<7} {:>8}/day",
            role_marker(card.role),
            vehicle.name,
            vehicle.type_label(),
            format_inr(vehicle.daily_rate)
        );
        if vehicle.has_weekly_tier() {
            line.push_str(&format!("  {}/week", format_inr(vehicle.weekly_rate)));
        }
        if !vehicle.available {
            line.push_str("  (unavailable)");
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    let filtered_out = view.cards.len() - view.visible_count;
    out.push_str(&"-".repeat(60));
    out.push('\n');
    out.push_str(&format!("{}\n", render_dots(dots)));
    if filtered_out > 0 {
        out.push_str(&format!("({} hidden by filter)\n", filtered_out));
    }
    out
}

pub fn render_session(session: &FleetSession) -> String {
    render_carousel(session.catalog(), &session.view(), session.dots())
}
