use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::config::Settings;
use crate::particles::ParticleStyle;

use super::dom;

/// Writes the current year into `#year`.
pub fn stamp_year(document: &Document) {
    if let Some(year) = document.get_element_by_id("year") {
        let now = js_sys::Date::new_0();
        year.set_text_content(Some(&now.get_full_year().to_string()));
    }
}

/// Appends the particle layer. Returns how many particles were created.
pub fn create_particles(document: &Document, settings: &Settings) -> usize {
    let Some(container) = dom::select::<HtmlElement>(document, ".particles") else {
        log::debug!("no .particles container");
        return 0;
    };
    let mut rng = js_sys::Math::random;
    let mut created = 0;
    for _ in 0..settings.particle_count {
        let Some(particle) = new_div(document, "particle") else {
            continue;
        };
        let params = ParticleStyle::sample(&mut rng);
        let style = particle.style();
        style.set_property("left", &params.left()).ok();
        style.set_property("animation-delay", &params.delay()).ok();
        style.set_property("animation-duration", &params.duration()).ok();
        style.set_property("background", params.color).ok();
        if container.append_child(&particle).is_ok() {
            created += 1;
        }
    }
    created
}

pub fn create_shapes(document: &Document, settings: &Settings) {
    let Some(container) = dom::select::<HtmlElement>(document, ".floating-shapes") else {
        log::debug!("no .floating-shapes container");
        return;
    };
    for _ in 0..settings.shape_count {
        if let Some(shape) = new_div(document, "shape") {
            container.append_child(&shape).ok();
        }
    }
}

fn new_div(document: &Document, class: &str) -> Option<HtmlElement> {
    let div = document
        .create_element("div")
        .ok()?
        .dyn_into::<HtmlElement>()
        .ok()?;
    div.set_class_name(class);
    Some(div)
}
