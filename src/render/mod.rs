//! Render output: render list and HTML markup

mod display;
pub mod markup;

pub use display::{ItemKind, ItemState, RenderItem, RenderList};
pub use markup::to_html;
