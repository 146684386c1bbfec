//! Input adapter: turns raw clicks inside the container into navigation actions

use crate::navigation::NavAction;

/// What was clicked, as read from the DOM
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClickTarget {
    /// Tag name of the clicked element's parent
    pub parent_tag: String,
    /// Class attribute of the parent
    pub parent_class: String,
    /// Text of the clicked element
    pub label: String,
}

impl ClickTarget {
    pub fn new(
        parent_tag: impl Into<String>,
        parent_class: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            parent_tag: parent_tag.into(),
            parent_class: parent_class.into(),
            label: label.into(),
        }
    }

    fn classes(&self) -> impl Iterator<Item = &str> {
        self.parent_class.split_whitespace()
    }
}

/// Stateless interpreter of click targets
#[derive(Debug, Clone, Copy, Default)]
pub struct InputAdapter;

impl InputAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Interpret a click given the currently selected page.
    ///
    /// Clicks outside a list item, on disabled controls, on non-numeric
    /// labels or on the selected page produce nothing.
    pub fn interpret(&self, target: &ClickTarget, selected: u32) -> Option<NavAction> {
        if !target.parent_tag.eq_ignore_ascii_case("li") {
            return None;
        }
        if target.classes().any(|class| class == "disabled") {
            return None;
        }
        if let Some(action) = target.classes().find_map(NavAction::from_control) {
            return Some(action);
        }

        let page: u32 = target.label.trim().parse().ok()?;
        if page == selected {
            return None;
        }
        Some(NavAction::Select(page))
    }
}
