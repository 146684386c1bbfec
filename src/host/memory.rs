//! Headless host that records every render pass

use rustc_hash::FxHashSet;

use crate::host::{Host, Surface};
use crate::render::{to_html, RenderList};

/// Host with a fixed set of known container locators
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    containers: FxHashSet<String>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host that knows exactly one container
    pub fn with_container(locator: impl Into<String>) -> Self {
        let mut host = Self::new();
        host.add_container(locator);
        host
    }

    pub fn add_container(&mut self, locator: impl Into<String>) {
        self.containers.insert(locator.into());
    }
}

impl Host for MemoryHost {
    type Surface = MemorySurface;

    fn resolve(&self, locator: &str) -> Option<MemorySurface> {
        self.containers
            .get(locator)
            .map(|locator| MemorySurface::new(locator.clone()))
    }
}

/// Surface that keeps the presented frames
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    locator: String,
    frames: Vec<RenderList>,
}

impl MemorySurface {
    pub fn new(locator: impl Into<String>) -> Self {
        Self {
            locator: locator.into(),
            frames: Vec::new(),
        }
    }

    pub fn locator(&self) -> &str {
        &self.locator
    }

    /// All frames in presentation order
    pub fn frames(&self) -> &[RenderList] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&RenderList> {
        self.frames.last()
    }

    /// Markup of the latest frame, what a DOM container would hold
    pub fn inner_html(&self) -> String {
        self.last_frame().map(to_html).unwrap_or_default()
    }
}

impl Surface for MemorySurface {
    fn present(&mut self, list: &RenderList) {
        self.frames.push(list.clone());
    }
}
