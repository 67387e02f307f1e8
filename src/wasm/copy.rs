use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, HtmlElement};

use crate::config::Settings;
use crate::copy::{payload, Confirmation};

use super::dom;

const ORIGINAL_ATTR: &str = "data-original";

/// Wires every `.copy` element. Returns how many were found.
pub fn attach(document: &Document, settings: &Rc<Settings>) -> Result<usize, JsValue> {
    let buttons = dom::select_all::<HtmlElement>(document, ".copy");
    for button in &buttons {
        if !button.has_attribute(ORIGINAL_ATTR) {
            let text = button.text_content().unwrap_or_default();
            button.set_attribute(ORIGINAL_ATTR, &text)?;
        }

        let confirmation = Rc::new(RefCell::new(Confirmation::default()));
        let settings = settings.clone();
        let target = button.clone();
        dom::listen(button, "click", move |_| {
            let text = payload(target.get_attribute("data-copy"));
            let button = target.clone();
            let confirmation = confirmation.clone();
            let settings = settings.clone();
            spawn_local(async move {
                match write_clipboard(&text).await {
                    Ok(()) => confirm(button, confirmation, &settings),
                    Err(err) => log::debug!("clipboard write rejected: {:?}", err),
                }
            });
        })?;
    }
    Ok(buttons.len())
}

/// `navigator.clipboard.writeText(text)`, looked up dynamically so pages
/// without the Clipboard API reject instead of trapping.
async fn write_clipboard(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let navigator = window.navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err("clipboard unavailable".into());
    }
    let write = Reflect::get(&clipboard, &JsValue::from_str("writeText"))?
        .dyn_into::<Function>()?;
    let promise = write
        .call1(&clipboard, &JsValue::from_str(text))?
        .dyn_into::<Promise>()?;
    JsFuture::from(promise).await?;
    Ok(())
}

/// Show the confirmation on `button` and schedule the restore. Only the
/// newest confirmation on a button gets to restore it.
pub fn confirm(button: HtmlElement, confirmation: Rc<RefCell<Confirmation>>, settings: &Settings) {
    button.set_text_content(Some(settings.copy_confirm_text));
    button
        .style()
        .set_property("background", settings.copy_highlight)
        .ok();

    let ticket = confirmation.borrow_mut().begin();
    let restore = Closure::once_into_js(move || {
        if !confirmation.borrow().is_current(ticket) {
            return;
        }
        if let Some(original) = button.get_attribute(ORIGINAL_ATTR) {
            button.set_text_content(Some(&original));
        }
        button.style().remove_property("background").ok();
    });

    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        restore.unchecked_ref(),
        settings.copy_confirm_ms,
    ) {
        log::warn!("could not schedule copy reset: {:?}", err);
    }
}
