use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlImageElement, KeyboardEvent, Node, TouchEvent};

use crate::config::Settings;
use crate::lightbox::{Lightbox, Nav};

use super::dom;

/// The modal viewer bound to the page's gallery items.
pub struct Viewer {
    state: RefCell<Lightbox>,
    items: Vec<HtmlElement>,
    modal: HtmlElement,
    image: Option<HtmlImageElement>,
    caption: Option<HtmlElement>,
    counter: Option<HtmlElement>,
    close_button: Option<HtmlElement>,
    body: Option<HtmlElement>,
    touch_start_x: Cell<f64>,
}

impl Viewer {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current(&self) -> Option<usize> {
        self.state.borrow().current()
    }

    pub fn open(&self, index: usize) {
        if self.state.borrow_mut().open(index).is_none() {
            return;
        }
        self.render();
        self.modal.set_hidden(false);
        if let Some(body) = &self.body {
            body.style().set_property("overflow", "hidden").ok();
        }
        if let Some(close) = &self.close_button {
            close.focus().ok();
        }
    }

    pub fn show(&self, delta: isize) {
        if self.state.borrow_mut().step(delta).is_some() {
            self.render();
        }
    }

    pub fn close(&self) {
        self.state.borrow_mut().close();
        self.modal.set_hidden(true);
        if let Some(body) = &self.body {
            body.style().remove_property("overflow").ok();
        }
    }

    fn navigate(&self, nav: Nav) {
        match nav.delta() {
            Some(delta) => self.show(delta),
            None => self.close(),
        }
    }

    fn is_visible(&self) -> bool {
        !self.modal.hidden() && self.state.borrow().is_open()
    }

    fn render(&self) {
        let (index, label) = {
            let state = self.state.borrow();
            match (state.current(), state.counter_label()) {
                (Some(index), Some(label)) => (index, label),
                _ => return,
            }
        };
        let Some(item) = self.items.get(index) else {
            return;
        };
        if let Some(image) = &self.image {
            let src = item
                .query_selector("img")
                .ok()
                .flatten()
                .and_then(|img| img.dyn_into::<HtmlImageElement>().ok())
                .map(|img| img.src())
                .unwrap_or_default();
            image.set_src(&src);
        }
        if let Some(caption) = &self.caption {
            let text = item.get_attribute("data-caption").unwrap_or_default();
            caption.set_text_content(Some(&text));
        }
        if let Some(counter) = &self.counter {
            counter.set_text_content(Some(&label));
        }
    }
}

/// Bind the lightbox to `.gallery-item`s. Returns `None` when the page has no
/// `#lightbox`.
pub fn attach(document: &Document, settings: &Settings) -> Result<Option<Rc<Viewer>>, JsValue> {
    let Some(modal) = dom::by_id::<HtmlElement>(document, "lightbox") else {
        log::debug!("no #lightbox, gallery viewer disabled");
        return Ok(None);
    };
    let items = dom::select_all::<HtmlElement>(document, ".gallery-item");
    let viewer = Rc::new(Viewer {
        state: RefCell::new(Lightbox::new(items.len())),
        items,
        modal,
        image: dom::select(document, ".lightbox-image"),
        caption: dom::by_id(document, "lightbox-caption"),
        counter: dom::by_id(document, "lightbox-counter"),
        close_button: dom::select(document, ".lightbox-close"),
        body: document.body(),
        touch_start_x: Cell::new(0.0),
    });

    for (index, item) in viewer.items.iter().enumerate() {
        item.set_tab_index(0);
        let v = viewer.clone();
        dom::listen(item, "click", move |_| v.open(index))?;
        let v = viewer.clone();
        dom::listen(item, "keypress", move |event| {
            if event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|key| key.key() == "Enter")
            {
                v.open(index);
            }
        })?;
    }

    let controls: [(&str, Nav); 3] = [
        (".lightbox-prev", Nav::Previous),
        (".lightbox-next", Nav::Next),
        (".lightbox-close", Nav::Close),
    ];
    for (selector, nav) in controls {
        if let Some(button) = dom::select::<HtmlElement>(document, selector) {
            let v = viewer.clone();
            dom::listen(&button, "click", move |_| v.navigate(nav))?;
        }
    }

    {
        let v = viewer.clone();
        dom::listen(&viewer.modal, "click", move |event| {
            let on_backdrop = event
                .target()
                .and_then(|target| target.dyn_into::<Node>().ok())
                .is_some_and(|node| node.is_same_node(Some(v.modal.as_ref())));
            if on_backdrop {
                v.close();
            }
        })?;
    }

    {
        let v = viewer.clone();
        let window = web_sys::window().ok_or("no window")?;
        dom::listen(&window, "keydown", move |event| {
            if !v.is_visible() {
                return;
            }
            let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if let Some(nav) = Nav::from_key(&key.key()) {
                v.navigate(nav);
            }
        })?;
    }

    {
        let v = viewer.clone();
        dom::listen_passive(&viewer.modal, "touchstart", move |event| {
            if let Some(x) = first_changed_touch_x(&event) {
                v.touch_start_x.set(x);
            }
        })?;
        let v = viewer.clone();
        let threshold = settings.swipe_threshold_px;
        dom::listen_passive(&viewer.modal, "touchend", move |event| {
            let Some(x) = first_changed_touch_x(&event) else {
                return;
            };
            if let Some(nav) = Nav::from_swipe(v.touch_start_x.get(), x, threshold) {
                v.navigate(nav);
            }
        })?;
    }

    Ok(Some(viewer))
}

fn first_changed_touch_x(event: &web_sys::Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?.changed_touches().get(0)?;
    Some(touch.client_x() as f64)
}
