//! Scroll helpers for the navigation sync

use leptos::prelude::{document, window};
use shared::SectionBounds;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Measure every `section[id]` landmark. Queried fresh per recomputation;
/// layout shifts (image loads, reveals) move the extents between frames.
pub fn collect_section_bounds() -> Vec<SectionBounds> {
    let mut sections = Vec::new();
    let Ok(list) = document().query_selector_all("section[id]") else {
        return sections;
    };
    for index in 0..list.length() {
        let Some(node) = list.item(index) else { continue };
        let Ok(element) = node.dyn_into::<HtmlElement>() else { continue };
        sections.push(SectionBounds {
            id: element.id(),
            top: element.offset_top() as f64,
            height: element.offset_height() as f64,
        });
    }
    sections
}

pub fn current_scroll_pos(offset: f64) -> f64 {
    window().scroll_y().unwrap_or(0.0) + offset
}

/// Smooth-scroll to an in-page anchor target. Returns false (after one
/// warning) when the target is missing so the caller leaves the highlight
/// untouched.
pub fn scroll_to_anchor(id: &str) -> bool {
    let Some(element) = document().get_element_by_id(id) else {
        log::warn!("navigation target '#{id}' not found");
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}
