use wasm_bindgen::JsValue;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::dom;

/// Smooth-scroll same-page anchors. Returns the number of anchors wired.
pub fn attach(document: &Document) -> Result<usize, JsValue> {
    let anchors = dom::select_all::<Element>(document, "a[href^=\"#\"]");
    for anchor in &anchors {
        let doc = document.clone();
        let link = anchor.clone();
        dom::listen(anchor, "click", move |event| {
            event.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            // A bare "#" is not a valid selector; query_selector errors and we
            // fall through.
            if let Some(target) = doc.query_selector(&href).ok().flatten() {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })?;
    }
    Ok(anchors.len())
}
