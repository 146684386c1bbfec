//! Navigation model: actions and the visible window

mod action;
mod window;

pub use action::NavAction;
pub use window::{NavigationState, WindowBounds};
