//! Navigation actions

/// One user-level navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    /// Jump the window to the beginning
    First,
    /// Move the window back by one step
    Prev,
    /// Move the window forward by one step
    Next,
    /// Jump the window to the end
    Last,
    /// Select a page directly
    Select(u32),
}

impl NavAction {
    /// Map an edge-control class token (`first`, `prev`, `next`, `last`)
    pub fn from_control(token: &str) -> Option<Self> {
        match token {
            "first" => Some(Self::First),
            "prev" => Some(Self::Prev),
            "next" => Some(Self::Next),
            "last" => Some(Self::Last),
            _ => None,
        }
    }
}
