//! Header scroll state and smooth in-page scrolling.

use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};

use super::dom::{listen, query, query_all};
use crate::core::scroll::{ANCHOR_SELECTOR, HEADER_SELECTOR, SCROLLED_CLASS};
use crate::core::{Config, SetupError, anchor_target_id, header_is_scrolled};

/// Toggle the header style on scroll and take over anchor clicks.
///
/// Returns the number of anchor links bound.
pub fn bind(window: &Window, document: &Document, config: &Config) -> Result<usize, SetupError> {
    let header = query(document, HEADER_SELECTOR)?;
    let threshold = config.scroll_threshold_px;

    let update_header = {
        let window = window.clone();
        move || {
            let offset = window.scroll_y().unwrap_or(0.0);
            let _ = header
                .class_list()
                .toggle_with_force(SCROLLED_CLASS, header_is_scrolled(offset, threshold));
        }
    };

    // A page restored mid-scroll starts in the right state
    update_header();
    listen(window, "scroll", move |_| update_header())?;

    let anchors = query_all(document, ANCHOR_SELECTOR)?;
    for anchor in &anchors {
        let link = anchor.clone();
        let document = document.clone();

        listen(anchor, "click", move |event| {
            event.prevent_default();

            let href = link.get_attribute("href").unwrap_or_default();
            let Some(target) = anchor_target_id(&href).and_then(|id| document.get_element_by_id(id))
            else {
                return;
            };

            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        })?;
    }

    Ok(anchors.len())
}
