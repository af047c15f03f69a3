use log::warn;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};

/// Smoothly scrolls to the element matching `selector`, e.g. `#contact`.
pub fn scroll_to_section(selector: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    match document.query_selector(selector) {
        Ok(Some(element)) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        _ => warn!("No section matches {}", selector),
    }
}

pub fn open_in_new_tab(url: &str) {
    if let Some(window) = window() {
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            warn!("Could not open {}: {:?}", url, e);
        }
    }
}
