//! Host environment seams: container lookup and render sinks

mod memory;

pub use memory::{MemoryHost, MemorySurface};

use crate::render::RenderList;

/// A resolved container that receives render passes
pub trait Surface {
    /// Draw one render pass
    fn present(&mut self, list: &RenderList);
}

/// Environment that resolves container locators
pub trait Host {
    type Surface: Surface;

    /// Look up the container for `locator`, `None` if nothing matches
    fn resolve(&self, locator: &str) -> Option<Self::Surface>;
}
