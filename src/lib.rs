//! Client-side effects for the portfolio page: particles, cursor follower,
//! magnetic hover, copy buttons, scroll reveal, card filters and the gallery
//! lightbox.
//!
//! The state and maths live in plain modules that build on every target; the
//! DOM wiring is only compiled for wasm32.

pub mod config;
pub mod copy;
pub mod cursor;
pub mod filter;
pub mod lightbox;
pub mod motion;
pub mod particles;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::Document;

    use crate::config::Settings;

    mod ambient;
    pub mod copy;
    mod cursor;
    pub mod dom;
    pub mod filter;
    pub mod lightbox;
    mod magnetic;
    pub mod reveal;
    pub mod scroll;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let settings = Rc::new(settings_from_body(&document));
        wasm_logger::init(wasm_logger::Config::new(settings.log_level));

        if dom::is_loading(&document) {
            // Module scripts can still run before parsing finishes when
            // loaded with `async`.
            let booted = Rc::new(Cell::new(false));
            let doc = document.clone();
            dom::listen(&document, "DOMContentLoaded", move |_| {
                if booted.replace(true) {
                    return;
                }
                if let Err(err) = boot(&doc, &settings) {
                    log::error!("boot failed: {:?}", err);
                }
            })?;
            return Ok(());
        }
        boot(&document, &settings)
    }

    /// Wires every effect once. Calling it twice duplicates particles and
    /// listeners.
    pub fn boot(document: &Document, settings: &Rc<Settings>) -> Result<(), JsValue> {
        ambient::stamp_year(document);
        let particles = ambient::create_particles(document, settings);
        ambient::create_shapes(document, settings);
        cursor::start(document, settings)?;
        let magnetic = magnetic::attach(document, settings)?;
        let copies = copy::attach(document, settings)?;
        let revealed = reveal::observe(document, settings)?;
        let groups = filter::init(document)?;
        let gallery = match lightbox::attach(document, settings)? {
            Some(viewer) => viewer.len(),
            None => 0,
        };
        let anchors = scroll::attach(document)?;

        log::info!(
            "effects ready: {} particles, {} magnetic, {} copy, {} reveal, {} filter groups, {} gallery items, {} anchors",
            particles,
            magnetic,
            copies,
            revealed,
            groups.len(),
            gallery,
            anchors
        );
        Ok(())
    }

    fn settings_from_body(document: &Document) -> Settings {
        match document.body() {
            Some(body) => Settings::from_lookup(|name| body.get_attribute(name)),
            None => Settings::default(),
        }
    }
}
