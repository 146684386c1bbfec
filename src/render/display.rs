//! Render list: the ordered entries a renderer draws

use smallvec::SmallVec;

use crate::config::Configuration;
use crate::navigation::{NavigationState, WindowBounds};

/// What an entry stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    First,
    Prev,
    Page(u32),
    Next,
    Last,
}

impl ItemKind {
    /// Class token identifying an edge control; pages have none
    pub fn control_class(&self) -> Option<&'static str> {
        match self {
            ItemKind::First => Some("first"),
            ItemKind::Prev => Some("prev"),
            ItemKind::Next => Some("next"),
            ItemKind::Last => Some("last"),
            ItemKind::Page(_) => None,
        }
    }
}

/// Visual state of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemState {
    #[default]
    Normal,
    Active,
    Disabled,
}

/// One entry of the control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderItem {
    pub kind: ItemKind,
    pub label: String,
    pub state: ItemState,
}

impl RenderItem {
    fn control(kind: ItemKind, label: &str, disabled: bool) -> Self {
        Self {
            kind,
            label: label.to_string(),
            state: if disabled {
                ItemState::Disabled
            } else {
                ItemState::Normal
            },
        }
    }

    fn page(page: u32, selected: u32) -> Self {
        Self {
            kind: ItemKind::Page(page),
            label: page.to_string(),
            state: if page == selected {
                ItemState::Active
            } else {
                ItemState::Normal
            },
        }
    }

    /// Class attribute value for markup, if any
    pub fn class_name(&self) -> Option<String> {
        match (self.kind.control_class(), self.state) {
            (Some(token), ItemState::Disabled) => Some(format!("{} disabled", token)),
            (Some(token), _) => Some(token.to_string()),
            (None, ItemState::Active) => Some("active".to_string()),
            (None, _) => None,
        }
    }
}

/// Complete render output for one pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderList {
    /// Render pass counter, starting at 1 for the mount render
    pub version: u64,
    pub sizing_class: String,
    pub items: SmallVec<[RenderItem; 12]>,
}

impl RenderList {
    /// Build the entries for `state` under `config`
    pub fn build(config: &Configuration, state: &NavigationState, version: u64) -> Self {
        let bounds = WindowBounds::new(config.row_size, config.total, config.step);
        let at_start = state.at_start();
        let at_end = !state.has_more(bounds);
        let labels = &config.labels;
        let mut items = SmallVec::new();

        if config.show_first_last {
            items.push(RenderItem::control(ItemKind::First, &labels.first, at_start));
        }
        if config.show_prev_next {
            items.push(RenderItem::control(ItemKind::Prev, &labels.prev, at_start));
        }
        for page in state.visible_pages(bounds) {
            items.push(RenderItem::page(page, state.selected()));
        }
        if config.show_prev_next {
            items.push(RenderItem::control(ItemKind::Next, &labels.next, at_end));
        }
        if config.show_first_last {
            items.push(RenderItem::control(ItemKind::Last, &labels.last, at_end));
        }

        Self {
            version,
            sizing_class: config.sizing_class.clone(),
            items,
        }
    }

    /// Page numbers in display order
    pub fn pages(&self) -> impl Iterator<Item = u32> + '_ {
        self.items.iter().filter_map(|item| match item.kind {
            ItemKind::Page(page) => Some(page),
            _ => None,
        })
    }

    /// The page marked active, if it is visible
    pub fn active_page(&self) -> Option<u32> {
        self.items.iter().find_map(|item| match (item.kind, item.state) {
            (ItemKind::Page(page), ItemState::Active) => Some(page),
            _ => None,
        })
    }

    /// Entry for a given kind
    pub fn item(&self, kind: ItemKind) -> Option<&RenderItem> {
        self.items.iter().find(|item| item.kind == kind)
    }

    pub fn is_disabled(&self, kind: ItemKind) -> bool {
        self.item(kind)
            .map(|item| item.state == ItemState::Disabled)
            .unwrap_or(false)
    }
}
