//! Pagination controller: owns navigation state and drives render passes

use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::config::Configuration;
use crate::error::{PaginationError, Result};
use crate::host::{Host, Surface};
use crate::navigation::{NavAction, NavigationState, WindowBounds};
use crate::render::RenderList;

/// Listener invoked with the page chosen through [`PaginationController::select_page`]
pub type SelectListener = Box<dyn FnMut(u32)>;

/// The navigation control bound to one container
pub struct PaginationController<S: Surface> {
    config: Configuration,
    state: NavigationState,
    surface: S,
    listener: Option<SelectListener>,
    render_count: u64,
}

impl<S: Surface> PaginationController<S> {
    /// Resolve the container on `host`, apply the initial selection and render once
    pub fn mount<H>(host: &H, config: Configuration) -> Result<Self>
    where
        H: Host<Surface = S>,
    {
        config.validate()?;
        let surface = host.resolve(&config.container).ok_or_else(|| {
            PaginationError::config(format!(
                "no element matches container `{}`",
                config.container
            ))
        })?;

        let bounds = bounds_of(&config);
        let mut state = NavigationState::default();
        let selected = state.select(config.current, bounds);
        if selected != config.current {
            warn!(
                requested = config.current,
                selected,
                total = bounds.total,
                "initial page clamped into range"
            );
        }

        let mut controller = Self {
            config,
            state,
            surface,
            listener: None,
            render_count: 0,
        };
        debug!(
            container = %controller.config.container,
            total = controller.config.total,
            row_size = controller.config.row_size,
            selected = controller.state.selected(),
            "mounted pagination"
        );
        controller.render();
        Ok(controller)
    }

    /// Mount from raw caller options (a JSON object)
    pub fn from_options<H>(host: &H, options: Value) -> Result<Self>
    where
        H: Host<Surface = S>,
    {
        Self::mount(host, Configuration::from_value(options)?)
    }

    /// Register the selection listener, replacing any previous one
    pub fn on_select<F>(&mut self, listener: F)
    where
        F: FnMut(u32) + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    /// Drop the selection listener
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Select `page`, realign the window if needed, render and notify the listener
    pub fn select_page(&mut self, page: u32) {
        let bounds = self.bounds();
        let selected = self.state.select(page, bounds);
        if selected != page {
            warn!(requested = page, selected, total = bounds.total, "page clamped into range");
        }
        trace!(selected, window_start = self.state.window_start(), "page selected");

        self.render();
        if let Some(listener) = self.listener.as_mut() {
            listener(selected);
        }
    }

    /// Jump the window to the first row. Returns whether a render ran.
    pub fn first(&mut self) -> bool {
        let moved = self.state.first();
        self.after_move("first", moved)
    }

    /// Step the window back. Returns whether a render ran.
    pub fn prev(&mut self) -> bool {
        let moved = self.state.prev(self.bounds());
        self.after_move("prev", moved)
    }

    /// Step the window forward. Returns whether a render ran.
    pub fn next(&mut self) -> bool {
        let moved = self.state.next(self.bounds());
        self.after_move("next", moved)
    }

    /// Jump the window to the last row. Returns whether a render ran.
    pub fn last(&mut self) -> bool {
        let moved = self.state.last(self.bounds());
        self.after_move("last", moved)
    }

    /// Apply a navigation action. Returns whether a render ran.
    pub fn dispatch(&mut self, action: NavAction) -> bool {
        match action {
            NavAction::First => self.first(),
            NavAction::Prev => self.prev(),
            NavAction::Next => self.next(),
            NavAction::Last => self.last(),
            NavAction::Select(page) => {
                self.select_page(page);
                true
            }
        }
    }

    /// Currently selected page
    pub fn current_page(&self) -> u32 {
        self.state.selected()
    }

    pub fn window_start(&self) -> u32 {
        self.state.window_start()
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Number of render passes so far, including the mount render
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    /// Render list for the current state
    pub fn render_list(&self) -> RenderList {
        RenderList::build(&self.config, &self.state, self.render_count)
    }

    fn bounds(&self) -> WindowBounds {
        bounds_of(&self.config)
    }

    fn after_move(&mut self, action: &'static str, moved: bool) -> bool {
        if moved {
            trace!(action, window_start = self.state.window_start(), "window moved");
            self.render();
        }
        moved
    }

    fn render(&mut self) {
        self.render_count += 1;
        let list = self.render_list();
        self.surface.present(&list);
    }
}

fn bounds_of(config: &Configuration) -> WindowBounds {
    WindowBounds::new(config.row_size, config.total, config.step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{MemoryHost, MemorySurface};
    use crate::render::ItemKind;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn mount(config: Configuration) -> PaginationController<MemorySurface> {
        let host = MemoryHost::with_container(config.container.clone());
        PaginationController::mount(&host, config).unwrap()
    }

    fn default_controller() -> PaginationController<MemorySurface> {
        mount(Configuration::new("#pager"))
    }

    fn recorder(
        controller: &mut PaginationController<MemorySurface>,
    ) -> Rc<RefCell<Vec<u32>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        controller.on_select(move |page| sink.borrow_mut().push(page));
        seen
    }

    #[test]
    fn test_mount_renders_once() {
        let controller = default_controller();
        assert_eq!(controller.current_page(), 1);
        assert_eq!(controller.window_start(), 0);
        assert_eq!(controller.render_count(), 1);
        assert_eq!(controller.surface().frames().len(), 1);
        assert_eq!(controller.surface().last_frame().unwrap().active_page(), Some(1));
    }

    #[test]
    fn test_mount_with_initial_page() {
        let controller = mount(Configuration::new("#pager").with_current(17));
        assert_eq!(controller.window_start(), 15);
        assert_eq!(
            controller.render_list().pages().collect::<Vec<_>>(),
            vec![16, 17, 18, 19, 20]
        );
    }

    #[test]
    fn test_mount_clamps_initial_page() {
        let controller = mount(Configuration::new("#pager").with_current(40));
        assert_eq!(controller.current_page(), 25);
        assert_eq!(controller.window_start(), 20);
        assert_eq!(controller.render_list().active_page(), Some(25));

        let controller = mount(Configuration::new("#pager").with_current(0));
        assert_eq!(controller.current_page(), 1);
        assert_eq!(controller.window_start(), 0);
    }

    #[test]
    fn test_mount_unknown_container() {
        let host = MemoryHost::with_container("#pager");
        let result = PaginationController::mount(&host, Configuration::new("#missing"));
        assert!(matches!(
            result,
            Err(PaginationError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_mount_invalid_options() {
        let host = MemoryHost::with_container("#pager");
        let result = PaginationController::from_options(&host, json!({ "tag": 7 }));
        assert!(matches!(
            result,
            Err(PaginationError::InvalidConfiguration(_))
        ));

        let result = PaginationController::from_options(&host, json!({ "tag": "#pager", "row": 0 }));
        assert!(result.is_err());

        let controller =
            PaginationController::from_options(&host, json!({ "tag": "#pager", "current": 6 }))
                .unwrap();
        assert_eq!(controller.window_start(), 5);
    }

    #[test]
    fn test_next_sequence_and_clamp() {
        let mut controller = default_controller();
        let mut starts = Vec::new();
        for _ in 0..4 {
            assert!(controller.next());
            starts.push(controller.window_start());
        }
        assert_eq!(starts, vec![5, 10, 15, 20]);
        assert_eq!(controller.render_count(), 5);

        assert!(!controller.next());
        assert_eq!(controller.window_start(), 20);
        assert_eq!(controller.render_count(), 5);
    }

    #[test]
    fn test_prev_at_start_is_noop() {
        let mut controller = default_controller();
        assert!(!controller.prev());
        assert_eq!(controller.window_start(), 0);
        assert_eq!(controller.render_count(), 1);
    }

    #[test]
    fn test_first_last_idempotent() {
        let mut controller = default_controller();
        assert!(!controller.first());
        assert!(controller.last());
        assert_eq!(controller.window_start(), 20);
        assert!(!controller.last());
        assert_eq!(controller.render_count(), 2);

        let frame = controller.surface().last_frame().unwrap();
        assert!(frame.is_disabled(ItemKind::Next));
        assert!(frame.is_disabled(ItemKind::Last));
        assert!(!frame.is_disabled(ItemKind::First));
    }

    #[test]
    fn test_window_moves_keep_selection() {
        let mut controller = default_controller();
        controller.select_page(3);
        controller.last();
        controller.prev();
        controller.next();
        assert_eq!(controller.current_page(), 3);
        assert_eq!(controller.render_list().active_page(), None);
        controller.first();
        assert_eq!(controller.render_list().active_page(), Some(3));
    }

    #[test]
    fn test_select_page_jumps_window() {
        let mut controller = default_controller();
        let seen = recorder(&mut controller);

        controller.select_page(13);
        assert_eq!(controller.current_page(), 13);
        assert_eq!(controller.window_start(), 10);

        let frame = controller.surface().last_frame().unwrap();
        assert_eq!(frame.pages().collect::<Vec<_>>(), vec![11, 12, 13, 14, 15]);
        assert_eq!(frame.active_page(), Some(13));
        assert_eq!(*seen.borrow(), vec![13]);
    }

    #[test]
    fn test_reselect_renders_and_notifies_each_time() {
        let mut controller = default_controller();
        let seen = recorder(&mut controller);

        controller.select_page(4);
        controller.select_page(4);
        controller.select_page(4);
        assert_eq!(controller.render_count(), 4);
        assert_eq!(*seen.borrow(), vec![4, 4, 4]);
    }

    #[test]
    fn test_window_moves_do_not_notify() {
        let mut controller = default_controller();
        let seen = recorder(&mut controller);

        controller.next();
        controller.last();
        controller.prev();
        controller.first();
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_listener_replaced() {
        let mut controller = default_controller();
        let first = recorder(&mut controller);
        controller.select_page(2);
        let second = recorder(&mut controller);
        controller.select_page(3);

        assert_eq!(*first.borrow(), vec![2]);
        assert_eq!(*second.borrow(), vec![3]);

        controller.clear_listener();
        controller.select_page(4);
        assert_eq!(*second.borrow(), vec![3]);
    }

    #[test]
    fn test_select_out_of_range_clamped() {
        let mut controller = default_controller();
        let seen = recorder(&mut controller);
        controller.select_page(40);
        assert_eq!(controller.current_page(), 25);
        assert_eq!(controller.window_start(), 20);
        controller.select_page(0);
        assert_eq!(controller.current_page(), 1);
        assert_eq!(*seen.borrow(), vec![25, 1]);
    }

    #[test]
    fn test_dispatch() {
        let mut controller = default_controller();
        let seen = recorder(&mut controller);

        assert!(controller.dispatch(NavAction::Next));
        assert!(controller.dispatch(NavAction::Last));
        assert!(!controller.dispatch(NavAction::Last));
        assert!(controller.dispatch(NavAction::Prev));
        assert_eq!(controller.window_start(), 15);
        assert!(controller.dispatch(NavAction::First));
        assert!(controller.dispatch(NavAction::Select(9)));
        assert_eq!(controller.window_start(), 5);
        assert_eq!(*seen.borrow(), vec![9]);
    }

    #[test]
    fn test_containment_after_selection() {
        let mut controller = mount(Configuration::new("#pager").with_row_size(4).with_total(30).with_step(3));
        for page in [30, 2, 17, 16, 5, 29, 12] {
            controller.next();
            controller.select_page(page);
            let start = controller.window_start();
            assert!(start < page && page <= start + 4);
        }
    }
}
