use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::config::Settings;
use crate::motion::{magnetic_transform, tilt_transform};

use super::dom;

const MAGNETIC_SELECTORS: [&str; 2] = [".btn", ".logo"];
const TILT_SELECTOR: &str = ".gallery-item";

/// Wires magnetic hover on buttons and the logo, and the tilt on gallery
/// cards. Returns the number of magnetic elements.
pub fn attach(document: &Document, settings: &Rc<Settings>) -> Result<usize, JsValue> {
    let mut count = 0;
    for selector in MAGNETIC_SELECTORS {
        for el in dom::select_all::<HtmlElement>(document, selector) {
            let settings = settings.clone();
            hover(&el, move |el, event| {
                magnetic_transform(
                    dom::bounding_rect(el),
                    (event.client_x() as f64, event.client_y() as f64),
                    settings.magnetic_strength,
                    settings.magnetic_scale,
                )
            })?;
            count += 1;
        }
    }
    for item in dom::select_all::<HtmlElement>(document, TILT_SELECTOR) {
        let settings = settings.clone();
        hover(&item, move |el, event| {
            tilt_transform(
                dom::bounding_rect(el),
                (event.client_x() as f64, event.client_y() as f64),
                settings.tilt_degrees,
                settings.tilt_lift_px,
            )
        })?;
    }
    Ok(count)
}

/// Sets the transform from `transform` on every mousemove and clears it on
/// mouseleave.
fn hover<F>(el: &HtmlElement, mut transform: F) -> Result<(), JsValue>
where
    F: FnMut(&HtmlElement, &MouseEvent) -> String + 'static,
{
    {
        let target = el.clone();
        dom::listen(el, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                let value = transform(&target, event);
                target.style().set_property("transform", &value).ok();
            }
        })?;
    }
    let target = el.clone();
    dom::listen(el, "mouseleave", move |_| {
        target.style().remove_property("transform").ok();
    })
}
