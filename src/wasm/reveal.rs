use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::config::Settings;

use super::dom;

const REVEAL_SELECTOR: &str = ".reveal";
const VISIBLE_CLASS: &str = "visible";

/// Observe every `.reveal` element and mark it visible the first time it
/// enters the viewport. Returns the number of observed elements.
pub fn observe(document: &Document, settings: &Settings) -> Result<usize, JsValue> {
    let targets = dom::select_all::<Element>(document, REVEAL_SELECTOR);
    if targets.is_empty() {
        return Ok(0);
    }

    let callback = Closure::wrap(Box::new(|entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                let target = entry.target();
                target.class_list().add_1(VISIBLE_CLASS).ok();
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(settings.reveal_threshold));
    let observer = match IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &init,
    ) {
        Ok(observer) => observer,
        Err(err) => {
            log::warn!("IntersectionObserver unavailable, revealing everything: {:?}", err);
            for target in &targets {
                target.class_list().add_1(VISIBLE_CLASS).ok();
            }
            return Ok(targets.len());
        }
    };
    callback.forget();

    for target in &targets {
        observer.observe(target);
    }
    Ok(targets.len())
}
