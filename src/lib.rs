//! Mini-Pager: a paginated navigation control for the browser
//!
//! This crate provides:
//! - The windowing core that decides which run of page numbers is visible
//! - A controller tracking first/prev/next/last/select navigation
//! - Render lists and HTML markup for the control
//! - An input adapter mapping clicks to navigation actions
//! - WASM bindings that mount the control into a DOM element

pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod input;
pub mod navigation;
pub mod render;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::WasmPagination;

// Re-export primary types
pub use config::{ConfigOverrides, Configuration, ControlLabels};
pub use controller::{PaginationController, SelectListener};
pub use error::{PaginationError, Result};
pub use host::{Host, MemoryHost, MemorySurface, Surface};
pub use input::{ClickTarget, InputAdapter};
pub use navigation::{NavAction, NavigationState, WindowBounds};
pub use render::{ItemKind, ItemState, RenderItem, RenderList};
