//! Window arithmetic: which run of page numbers is visible

use std::ops::RangeInclusive;

/// The numeric limits a window moves within
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowBounds {
    pub row_size: u32,
    pub total: u32,
    pub step: u32,
}

impl WindowBounds {
    pub fn new(row_size: u32, total: u32, step: u32) -> Self {
        Self {
            row_size,
            total,
            step,
        }
    }

    /// Largest window start reachable by first/prev/next/last
    pub fn last_start(&self) -> u32 {
        self.total.saturating_sub(self.row_size)
    }

    /// Window start that holds `page` when the window is realigned to a row
    pub fn aligned_start(&self, page: u32) -> u32 {
        (page.saturating_sub(1) / self.row_size) * self.row_size
    }
}

/// Selected page plus the offset of the visible window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    selected: u32,
    window_start: u32,
}

impl NavigationState {
    /// State with `current` selected and the window realigned around it
    pub fn new(current: u32, bounds: WindowBounds) -> Self {
        let mut state = Self::default();
        state.select(current, bounds);
        state
    }

    pub fn selected(&self) -> u32 {
        self.selected
    }

    pub fn window_start(&self) -> u32 {
        self.window_start
    }

    /// Whether `page` lies inside the current window
    pub fn window_contains(&self, page: u32, bounds: WindowBounds) -> bool {
        page > self.window_start && page <= self.window_start.saturating_add(bounds.row_size)
    }

    /// Select `page`, clamped to `1..=total`, and realign the window if the
    /// page falls outside it. Returns the page actually selected.
    pub fn select(&mut self, page: u32, bounds: WindowBounds) -> u32 {
        let page = page.clamp(1, bounds.total.max(1));
        self.selected = page;
        if !self.window_contains(page, bounds) {
            self.window_start = bounds.aligned_start(page);
        }
        page
    }

    /// Move the window to the start. Returns whether it moved.
    pub fn first(&mut self) -> bool {
        self.move_to(0)
    }

    /// Move the window to the end. Returns whether it moved.
    pub fn last(&mut self, bounds: WindowBounds) -> bool {
        self.move_to(bounds.last_start())
    }

    /// Advance by one step, stopping at the last window
    pub fn next(&mut self, bounds: WindowBounds) -> bool {
        let end = bounds.last_start();
        let target = self.window_start.saturating_add(bounds.step).min(end);
        self.move_to(target)
    }

    /// Retreat by one step, stopping at zero
    pub fn prev(&mut self, bounds: WindowBounds) -> bool {
        let target = if self.window_start < bounds.step {
            0
        } else {
            let retreated = self.window_start - bounds.step;
            let end = bounds.last_start();
            if retreated >= end {
                end.saturating_sub(bounds.step)
            } else {
                retreated
            }
        };
        self.move_to(target)
    }

    /// Page numbers currently visible
    pub fn visible_pages(&self, bounds: WindowBounds) -> RangeInclusive<u32> {
        let end = self
            .window_start
            .saturating_add(bounds.row_size)
            .min(bounds.total);
        (self.window_start + 1)..=end
    }

    /// First/prev controls are disabled here
    pub fn at_start(&self) -> bool {
        self.window_start == 0
    }

    /// Next/last controls stay enabled until the window start equals
    /// `total - row_size` exactly (signed, not clamped).
    pub fn has_more(&self, bounds: WindowBounds) -> bool {
        i64::from(self.window_start) != i64::from(bounds.total) - i64::from(bounds.row_size)
    }

    fn move_to(&mut self, target: u32) -> bool {
        if self.window_start == target {
            return false;
        }
        self.window_start = target;
        true
    }
}
