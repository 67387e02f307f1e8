//! Tag matching for the card filter groups.

/// Filter value that shows every card.
pub const ALL: &str = "all";

/// How a card's tag attribute is compared against the active filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagMatch {
    /// Attribute holds exactly one category.
    Exact,
    /// Attribute holds whitespace-separated tags; any may match.
    AnyOf,
}

impl TagMatch {
    /// Whether a card carrying `card` should be visible under `filter`.
    ///
    /// A control with no filter value hides everything.
    pub fn is_visible(self, filter: Option<&str>, card: Option<&str>) -> bool {
        let Some(filter) = filter else {
            return false;
        };
        if filter == ALL {
            return true;
        }
        match self {
            TagMatch::Exact => card == Some(filter),
            TagMatch::AnyOf => card
                .unwrap_or("")
                .split_whitespace()
                .any(|tag| tag == filter),
        }
    }
}

/// Static description of one filter group on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupSpec {
    pub name: &'static str,
    pub controls: &'static str,
    pub cards: &'static str,
    pub tag_attr: &'static str,
    pub matching: TagMatch,
}

pub const PROJECTS: GroupSpec = GroupSpec {
    name: "projects",
    controls: "#projects .filter",
    cards: "#projects .project",
    tag_attr: "data-tags",
    matching: TagMatch::AnyOf,
};

pub const GALLERY: GroupSpec = GroupSpec {
    name: "gallery",
    controls: "#gallery .filter",
    cards: "#gallery .gallery-item",
    tag_attr: "data-project",
    matching: TagMatch::Exact,
};
