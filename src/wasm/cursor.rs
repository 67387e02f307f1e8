use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Document, HtmlElement, MouseEvent};

use crate::config::Settings;
use crate::cursor::Follower;

use super::dom;

/// Start the cursor follower. Does nothing when the page has no `.cursor`.
pub fn start(document: &Document, settings: &Settings) -> Result<(), JsValue> {
    let Some(cursor) = dom::select::<HtmlElement>(document, ".cursor") else {
        log::debug!("no .cursor element, follower disabled");
        return Ok(());
    };
    let window = window().ok_or("no window")?;
    let follower = Rc::new(RefCell::new(Follower::new(settings.cursor_smoothing)));

    {
        let follower = follower.clone();
        dom::listen(&window, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                follower
                    .borrow_mut()
                    .pointer_moved(event.client_x() as f64, event.client_y() as f64);
            }
        })?;
    }

    // Animation loop
    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let (x, y) = follower.borrow_mut().tick();
        let style = cursor.style();
        style.set_property("left", &format!("{x}px")).ok();
        style.set_property("top", &format!("{y}px")).ok();

        // schedule next
        if let (Some(window), Some(frame)) = (web_sys::window(), f.borrow().as_ref()) {
            window
                .request_animation_frame(frame.as_ref().unchecked_ref())
                .ok();
        }
    }) as Box<dyn FnMut()>));

    if let Some(frame) = g.borrow().as_ref() {
        window.request_animation_frame(frame.as_ref().unchecked_ref())?;
    }
    Ok(())
}
