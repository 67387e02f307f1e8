#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{
    Document, HtmlElement, KeyboardEvent, KeyboardEventInit, MouseEvent, MouseEventInit, Touch,
    TouchEvent, TouchEventInit, TouchInit,
};

use folio_fx::config::Settings;
use folio_fx::copy::Confirmation;
use folio_fx::wasm::{copy, dom, filter, lightbox, reveal, scroll};

wasm_bindgen_test_configure!(run_in_browser);

const PAGE: &str = r#"
<section id="projects">
  <button class="filter active" data-filter="all">All</button>
  <button class="filter" data-filter="mobile">Mobile</button>
  <button class="filter" data-filter="design">Design</button>
  <article class="project" data-tags="web mobile">A</article>
  <article class="project" data-tags="design">B</article>
  <article class="project" style="display: none">C</article>
</section>
<section id="gallery">
  <button class="filter" data-filter="all">All</button>
  <button class="filter active" data-filter="alpha">Alpha</button>
  <div class="gallery-item" data-project="alpha" data-caption="first"><img src="one.png"></div>
  <div class="gallery-item" data-project="beta" data-caption="second"><img src="two.png"></div>
  <div class="gallery-item" data-project="alpha beta"><img src="three.png"></div>
</section>
<div id="lightbox" hidden>
  <button class="lightbox-close">x</button>
  <button class="lightbox-prev">&lt;</button>
  <figure class="lightbox-content">
    <img class="lightbox-image" alt="">
    <figcaption id="lightbox-caption"></figcaption>
  </figure>
  <span id="lightbox-counter"></span>
  <button class="lightbox-next">&gt;</button>
</div>
"#;

/// Replaces the contents of `#fixture`, leaving the runner's own output
/// elements in `<body>` alone.
fn fixture_with(html: &str) -> Document {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let body = document.body().unwrap();
    let root = match document.get_element_by_id("fixture") {
        Some(root) => root,
        None => {
            let root = document.create_element("div").unwrap();
            root.set_id("fixture");
            body.append_child(&root).unwrap();
            root
        }
    };
    root.set_inner_html(html);
    body.style().remove_property("overflow").unwrap();
    document
}

fn fixture() -> Document {
    fixture_with(PAGE)
}

async fn sleep(ms: i32) {
    let promise = Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn shown(el: &HtmlElement) -> bool {
    el.style().get_property_value("display").unwrap() != "none"
}

fn click(document: &Document, selector: &str) {
    dom::select::<HtmlElement>(document, selector)
        .expect("element not found")
        .click();
}

fn press(key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
}

fn swipe(target: &HtmlElement, from_x: f64, to_x: f64) {
    for (kind, x) in [("touchstart", from_x), ("touchend", to_x)] {
        let touch_init = TouchInit::new(0, target);
        touch_init.set_client_x(x);
        let touch = Touch::new(&touch_init).unwrap();
        let init = TouchEventInit::new();
        init.set_changed_touches(&Array::of1(&touch));
        let event = TouchEvent::new_with_event_init_dict(kind, &init).unwrap();
        target.dispatch_event(&event).unwrap();
    }
}

fn background(el: &HtmlElement) -> String {
    el.style().get_property_value("background").unwrap()
}

fn copy_button(document: &Document) -> HtmlElement {
    let button = document
        .create_element("button")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    button.set_text_content(Some("Copy email"));
    button.set_attribute("data-original", "Copy email").unwrap();
    document
        .get_element_by_id("fixture")
        .unwrap()
        .append_child(&button)
        .unwrap();
    button
}

fn text(document: &Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

#[wasm_bindgen_test]
fn filters_start_reset() {
    let document = fixture();
    let groups = filter::init(&document).unwrap();
    assert_eq!(groups.len(), 2);
    for group in &groups {
        assert!(!group.cards().is_empty(), "{} has no cards", group.name());
        assert!(group.cards().iter().all(shown));
        assert!(group
            .controls()
            .iter()
            .all(|c| !c.class_list().contains("active")));
    }
}

#[wasm_bindgen_test]
fn project_filter_uses_tag_sets() {
    let document = fixture();
    let groups = filter::init(&document).unwrap();
    let projects = &groups[0];

    click(&document, "#projects .filter[data-filter=mobile]");
    let cards = projects.cards();
    assert!(shown(&cards[0]));
    assert!(!shown(&cards[1]));
    assert!(!shown(&cards[2]));
    let active: Vec<_> = projects
        .controls()
        .iter()
        .filter(|c| c.class_list().contains("active"))
        .collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].get_attribute("data-filter").as_deref(), Some("mobile"));

    click(&document, "#projects .filter[data-filter=design]");
    assert!(!shown(&cards[0]));
    assert!(shown(&cards[1]));
}

#[wasm_bindgen_test]
fn gallery_filter_matches_exactly() {
    let document = fixture();
    let groups = filter::init(&document).unwrap();
    let gallery = &groups[1];

    click(&document, "#gallery .filter[data-filter=alpha]");
    let cards = gallery.cards();
    assert!(shown(&cards[0]));
    assert!(!shown(&cards[1]));
    assert!(!shown(&cards[2]));

    click(&document, "#gallery .filter[data-filter=all]");
    assert!(cards.iter().all(shown));
}

#[wasm_bindgen_test]
fn lightbox_opens_and_navigates() {
    let document = fixture();
    let viewer = lightbox::attach(&document, &Settings::default())
        .unwrap()
        .expect("lightbox missing");
    assert_eq!(viewer.len(), 3);

    let items = dom::select_all::<HtmlElement>(&document, ".gallery-item");
    items[1].click();
    assert_eq!(viewer.current(), Some(1));
    assert_eq!(text(&document, "lightbox-counter"), "2 / 3");
    assert_eq!(text(&document, "lightbox-caption"), "second");
    let modal = dom::by_id::<HtmlElement>(&document, "lightbox").unwrap();
    assert!(!modal.hidden());
    let body = document.body().unwrap();
    assert_eq!(body.style().get_property_value("overflow").unwrap(), "hidden");

    click(&document, ".lightbox-next");
    assert_eq!(text(&document, "lightbox-counter"), "3 / 3");
    assert_eq!(text(&document, "lightbox-caption"), "");

    press("ArrowRight");
    assert_eq!(viewer.current(), Some(0));
    let image = dom::select::<web_sys::HtmlImageElement>(&document, ".lightbox-image").unwrap();
    assert!(image.src().ends_with("one.png"), "src={}", image.src());

    press("ArrowLeft");
    assert_eq!(viewer.current(), Some(2));
}

#[wasm_bindgen_test]
fn escape_closes_and_restores_scroll() {
    let document = fixture();
    let viewer = lightbox::attach(&document, &Settings::default()).unwrap().unwrap();
    viewer.open(0);

    press("Escape");
    assert_eq!(viewer.current(), None);
    let modal = dom::by_id::<HtmlElement>(&document, "lightbox").unwrap();
    assert!(modal.hidden());
    let body = document.body().unwrap();
    assert_eq!(body.style().get_property_value("overflow").unwrap(), "");

    // Keys are ignored once closed.
    press("ArrowRight");
    assert_eq!(viewer.current(), None);
}

#[wasm_bindgen_test]
fn backdrop_click_closes_but_content_click_does_not() {
    let document = fixture();
    let viewer = lightbox::attach(&document, &Settings::default()).unwrap().unwrap();
    viewer.open(2);

    click(&document, ".lightbox-content");
    assert_eq!(viewer.current(), Some(2));

    let modal = dom::by_id::<HtmlElement>(&document, "lightbox").unwrap();
    modal.click();
    assert_eq!(viewer.current(), None);
    assert!(modal.hidden());
}

#[wasm_bindgen_test]
fn missing_lightbox_is_not_an_error() {
    let document = fixture();
    document.get_element_by_id("lightbox").unwrap().remove();
    assert!(lightbox::attach(&document, &Settings::default()).unwrap().is_none());
}

#[wasm_bindgen_test]
fn enter_on_focused_item_opens() {
    let document = fixture();
    let viewer = lightbox::attach(&document, &Settings::default()).unwrap().unwrap();
    let items = dom::select_all::<HtmlElement>(&document, ".gallery-item");
    assert_eq!(items[2].tab_index(), 0);

    let init = KeyboardEventInit::new();
    init.set_key("Enter");
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keypress", &init).unwrap();
    items[2].dispatch_event(&event).unwrap();

    assert_eq!(viewer.current(), Some(2));
    assert_eq!(text(&document, "lightbox-counter"), "3 / 3");
}

#[wasm_bindgen_test]
fn horizontal_swipe_navigates() {
    let document = fixture();
    let viewer = lightbox::attach(&document, &Settings::default()).unwrap().unwrap();
    let modal = dom::by_id::<HtmlElement>(&document, "lightbox").unwrap();

    // Closed viewers ignore swipes.
    swipe(&modal, 200.0, 100.0);
    assert_eq!(viewer.current(), None);

    viewer.open(1);
    swipe(&modal, 200.0, 100.0);
    assert_eq!(viewer.current(), Some(2));
    swipe(&modal, 100.0, 200.0);
    assert_eq!(viewer.current(), Some(1));
    swipe(&modal, 100.0, 150.0);
    assert_eq!(viewer.current(), Some(1));
    swipe(&modal, 150.0, 100.0);
    assert_eq!(viewer.current(), Some(1));
}

#[wasm_bindgen_test]
fn anchors_prevent_default_even_without_target() {
    let document = fixture_with(
        r##"<a href="#missing">missing</a><a href="#">top</a><section id="here">here</section><a href="#here">here</a>"##,
    );
    assert!(scroll::attach(&document).unwrap() >= 3);

    for selector in [r##"a[href="#missing"]"##, r##"a[href="#"]"##, r##"a[href="#here"]"##] {
        let anchor = dom::select::<HtmlElement>(&document, selector).unwrap();
        let init = MouseEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        let event = MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap();
        let not_cancelled = anchor.dispatch_event(&event).unwrap();
        assert!(!not_cancelled, "{selector} was not cancelled");
        assert!(event.default_prevented());
    }
}

#[wasm_bindgen_test(async)]
async fn reveal_marks_elements_in_view() {
    let document = fixture_with(
        r#"<div class="reveal" style="position: fixed; top: 0; left: 0; width: 100px; height: 100px"></div>
<div class="other" style="position: fixed; top: 0; left: 0; width: 100px; height: 100px"></div>"#,
    );
    assert_eq!(reveal::observe(&document, &Settings::default()).unwrap(), 1);

    sleep(200).await;
    let marked = dom::select::<HtmlElement>(&document, ".reveal").unwrap();
    assert!(marked.class_list().contains("visible"));
    let other = dom::select::<HtmlElement>(&document, ".other").unwrap();
    assert!(!other.class_list().contains("visible"));
}

#[wasm_bindgen_test(async)]
async fn copy_confirmation_restores_after_delay() {
    let document = fixture_with("");
    let button = copy_button(&document);
    let settings = Settings {
        copy_confirm_ms: 20,
        ..Settings::default()
    };
    let confirmation = Rc::new(RefCell::new(Confirmation::default()));

    copy::confirm(button.clone(), confirmation.clone(), &settings);
    copy::confirm(button.clone(), confirmation.clone(), &settings);
    assert_eq!(button.text_content().as_deref(), Some("✅ Copied!"));
    assert!(!background(&button).is_empty());

    sleep(80).await;
    assert_eq!(button.text_content(), button.get_attribute("data-original"));
    assert_eq!(background(&button), "");
}

#[wasm_bindgen_test(async)]
async fn stale_copy_timer_leaves_newer_confirmation() {
    let document = fixture_with("");
    let button = copy_button(&document);
    let settings = Settings {
        copy_confirm_ms: 100,
        ..Settings::default()
    };
    let confirmation = Rc::new(RefCell::new(Confirmation::default()));

    copy::confirm(button.clone(), confirmation.clone(), &settings);
    sleep(60).await;
    copy::confirm(button.clone(), confirmation.clone(), &settings);

    // The first timer has fired by now; the second is still pending.
    sleep(70).await;
    assert_eq!(button.text_content().as_deref(), Some("✅ Copied!"));

    sleep(120).await;
    assert_eq!(button.text_content().as_deref(), Some("Copy email"));
    assert_eq!(background(&button), "");
}

#[wasm_bindgen_test]
fn parsed_document_is_not_loading() {
    let document = fixture_with("");
    assert!(!dom::is_loading(&document));
}
