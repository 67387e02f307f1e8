use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement};

use crate::filter::{GroupSpec, GALLERY, PROJECTS};

use super::dom;

const ACTIVE_CLASS: &str = "active";

/// One set of filter controls and the cards they toggle.
pub struct FilterGroup {
    spec: GroupSpec,
    controls: Vec<HtmlElement>,
    cards: Vec<HtmlElement>,
}

impl FilterGroup {
    pub fn collect(document: &Document, spec: GroupSpec) -> Self {
        Self {
            spec,
            controls: dom::select_all(document, spec.controls),
            cards: dom::select_all(document, spec.cards),
        }
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn controls(&self) -> &[HtmlElement] {
        &self.controls
    }

    pub fn cards(&self) -> &[HtmlElement] {
        &self.cards
    }

    /// Make `index` the only active control and filter the cards by its
    /// `data-filter`.
    pub fn activate(&self, index: usize) {
        let Some(control) = self.controls.get(index) else {
            return;
        };
        for other in &self.controls {
            other.class_list().remove_1(ACTIVE_CLASS).ok();
        }
        control.class_list().add_1(ACTIVE_CLASS).ok();
        self.apply(control.get_attribute("data-filter").as_deref());
    }

    pub fn apply(&self, filter: Option<&str>) {
        for card in &self.cards {
            let tags = card.get_attribute(self.spec.tag_attr);
            let show = self.spec.matching.is_visible(filter, tags.as_deref());
            set_shown(card, show);
        }
    }

    /// No active control, every card shown.
    pub fn reset(&self) {
        for control in &self.controls {
            control.class_list().remove_1(ACTIVE_CLASS).ok();
        }
        for card in &self.cards {
            set_shown(card, true);
        }
    }

    fn wire(self: &Rc<Self>) -> Result<(), JsValue> {
        for (index, control) in self.controls.iter().enumerate() {
            let group = self.clone();
            dom::listen(control, "click", move |_| group.activate(index))?;
        }
        Ok(())
    }
}

fn set_shown(card: &HtmlElement, show: bool) {
    let style = card.style();
    if show {
        style.remove_property("display").ok();
    } else {
        style.set_property("display", "none").ok();
    }
}

/// Wire both groups and reset them so every card starts visible, whatever
/// the markup marks as active.
pub fn init(document: &Document) -> Result<Vec<Rc<FilterGroup>>, JsValue> {
    let mut groups = Vec::with_capacity(2);
    for spec in [PROJECTS, GALLERY] {
        let group = Rc::new(FilterGroup::collect(document, spec));
        group.wire()?;
        group.reset();
        log::debug!(
            "{} filter: {} controls, {} cards",
            group.name(),
            group.controls.len(),
            group.cards.len()
        );
        groups.push(group);
    }
    Ok(groups)
}
