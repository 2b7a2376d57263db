use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, ScrollBehavior, ScrollToOptions};

use super::runtime::{element_box, read_viewport};
use crate::nav::anchor_scroll_top;

/// Smoothly scrolls so the section with id `section_id` sits just below the
/// fixed header. Does nothing if there is no such section.
pub fn scroll_to_section(section_id: &str, header_offset: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let section_top = window
        .document()
        .and_then(|document| document.get_element_by_id(section_id))
        .zip(read_viewport())
        .map(|(element, viewport)| element_box(&element, &viewport).top);

    let Some(top) = anchor_scroll_top(section_top, header_offset) else {
        debug!("No #{} section to scroll to", section_id);
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Whether the event happened inside an element matching `selector`.
pub fn event_within(event: &Event, selector: &str) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(selector).ok().flatten())
        .is_some()
}
