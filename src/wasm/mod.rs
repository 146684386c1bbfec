//! WASM bindings for the pagination control

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::host::{Host, Surface};
use crate::input::{ClickTarget, InputAdapter};
use crate::render::{to_html, ItemKind, ItemState, RenderList};
use crate::{Configuration, PaginationController, PaginationError};

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Host backed by the page's `document`
pub struct DomHost {
    document: web_sys::Document,
}

impl DomHost {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    /// Host for the current window, if running in a browser
    pub fn from_window() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }
}

impl Host for DomHost {
    type Surface = DomSurface;

    fn resolve(&self, locator: &str) -> Option<DomSurface> {
        self.document
            .query_selector(locator)
            .ok()
            .flatten()
            .map(|element| DomSurface { element })
    }
}

/// Container element; each render pass replaces its inner HTML
pub struct DomSurface {
    element: web_sys::Element,
}

impl DomSurface {
    pub fn element(&self) -> &web_sys::Element {
        &self.element
    }
}

impl Surface for DomSurface {
    fn present(&mut self, list: &RenderList) {
        self.element.set_inner_html(&to_html(list));
    }
}

/// State shared between the binding object and the click closure
struct Shared {
    controller: RefCell<PaginationController<DomSurface>>,
    callback: RefCell<Option<js_sys::Function>>,
    /// Page selected during the last operation, awaiting delivery to JS
    pending: Rc<Cell<Option<u32>>>,
}

impl Shared {
    /// Run `op` on the controller, then deliver any selection once the borrow is released
    fn run<R>(
        &self,
        op: impl FnOnce(&mut PaginationController<DomSurface>) -> R,
    ) -> Result<R, JsValue> {
        let mut controller = self.controller.borrow_mut();
        let result = op(&mut *controller);
        drop(controller);
        self.notify()?;
        Ok(result)
    }

    fn notify(&self) -> Result<(), JsValue> {
        let Some(page) = self.pending.take() else {
            return Ok(());
        };
        let callback = self.callback.borrow().clone();
        if let Some(callback) = callback {
            callback.call1(&JsValue::NULL, &JsValue::from(page))?;
        }
        Ok(())
    }

    fn handle_click(&self, event: &web_sys::Event) {
        event.prevent_default();
        let Some(target) = click_target(event) else {
            return;
        };

        let selected = self.controller.borrow().current_page();
        let Some(action) = InputAdapter::new().interpret(&target, selected) else {
            return;
        };
        if let Err(err) = self.run(|controller| controller.dispatch(action)) {
            web_sys::console::error_1(&err);
        }
    }
}

fn click_target(event: &web_sys::Event) -> Option<ClickTarget> {
    let element = event.target()?.dyn_into::<web_sys::Element>().ok()?;
    let parent = element.parent_element()?;
    Some(ClickTarget::new(
        parent.tag_name(),
        parent.class_name(),
        element.text_content().unwrap_or_default(),
    ))
}

fn config_from_js(options: &JsValue) -> Result<Configuration, PaginationError> {
    if !options.is_object() {
        return Err(PaginationError::config("options must be an object"));
    }
    let json = js_sys::JSON::stringify(options)
        .ok()
        .and_then(|json| json.as_string())
        .ok_or_else(|| PaginationError::config("options are not serializable"))?;
    Configuration::from_json(&json)
}

/// WASM-exposed pagination control
#[wasm_bindgen]
pub struct WasmPagination {
    shared: Rc<Shared>,
    element: web_sys::Element,
    on_click: Closure<dyn FnMut(web_sys::Event)>,
}

#[wasm_bindgen]
impl WasmPagination {
    /// Mount a control into the element matched by `options.container` (or `options.tag`)
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<WasmPagination, JsError> {
        let config = config_from_js(&options)?;
        let host = DomHost::from_window()
            .ok_or_else(|| PaginationError::config("no document to resolve the container in"))?;
        let mut controller = PaginationController::mount(&host, config)?;

        let pending = Rc::new(Cell::new(None));
        let parked = Rc::clone(&pending);
        controller.on_select(move |page| parked.set(Some(page)));

        let element = controller.surface().element().clone();
        let shared = Rc::new(Shared {
            controller: RefCell::new(controller),
            callback: RefCell::new(None),
            pending,
        });

        let weak = Rc::downgrade(&shared);
        let on_click = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(shared) = weak.upgrade() {
                shared.handle_click(&event);
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        element
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(|_| PaginationError::config("container does not accept click listeners"))?;

        Ok(Self {
            shared,
            element,
            on_click,
        })
    }

    /// Register the page-selected callback, replacing the previous one
    #[wasm_bindgen(js_name = onSelect)]
    pub fn on_select(&self, callback: JsValue) -> Result<(), JsError> {
        let callback = callback
            .dyn_into::<js_sys::Function>()
            .map_err(|_| PaginationError::InvalidCallback)?;
        *self.shared.callback.borrow_mut() = Some(callback);
        Ok(())
    }

    /// Jump to the first row of pages
    pub fn first(&self) -> Result<bool, JsValue> {
        self.shared.run(|controller| controller.first())
    }

    /// Step back
    pub fn prev(&self) -> Result<bool, JsValue> {
        self.shared.run(|controller| controller.prev())
    }

    /// Step forward
    pub fn next(&self) -> Result<bool, JsValue> {
        self.shared.run(|controller| controller.next())
    }

    /// Jump to the last row of pages
    pub fn last(&self) -> Result<bool, JsValue> {
        self.shared.run(|controller| controller.last())
    }

    /// Select a page and notify the callback
    #[wasm_bindgen(js_name = selectPage)]
    pub fn select_page(&self, page: u32) -> Result<(), JsValue> {
        self.shared.run(|controller| controller.select_page(page))
    }

    #[wasm_bindgen(getter = currentPage)]
    pub fn current_page(&self) -> u32 {
        self.shared.controller.borrow().current_page()
    }

    #[wasm_bindgen(getter = windowStart)]
    pub fn window_start(&self) -> u32 {
        self.shared.controller.borrow().window_start()
    }

    /// Current render list as a plain object
    #[wasm_bindgen(js_name = getRenderData)]
    pub fn get_render_data(&self) -> JsValue {
        let controller = self.shared.controller.borrow();
        let data = RenderData::from_render_list(&controller.render_list(), controller.current_page());

        serde_json::to_string(&data)
            .ok()
            .and_then(|json| js_sys::JSON::parse(&json).ok())
            .unwrap_or(JsValue::NULL)
    }

    /// Current markup
    #[wasm_bindgen(js_name = toHtml)]
    pub fn to_html(&self) -> String {
        to_html(&self.shared.controller.borrow().render_list())
    }
}

impl Drop for WasmPagination {
    fn drop(&mut self) {
        let _ = self
            .element
            .remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref());
    }
}

/// Serializable render data for JS
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderData {
    pub version: u64,
    pub sizing_class: String,
    pub current_page: u32,
    pub items: Vec<ItemRenderData>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRenderData {
    pub kind: String,
    pub page: Option<u32>,
    pub label: String,
    pub state: String,
}

impl RenderData {
    fn from_render_list(list: &RenderList, current_page: u32) -> Self {
        let items = list
            .items
            .iter()
            .map(|item| {
                let (kind, page) = match item.kind {
                    ItemKind::First => ("first", None),
                    ItemKind::Prev => ("prev", None),
                    ItemKind::Page(page) => ("page", Some(page)),
                    ItemKind::Next => ("next", None),
                    ItemKind::Last => ("last", None),
                };
                let state = match item.state {
                    ItemState::Normal => "normal",
                    ItemState::Active => "active",
                    ItemState::Disabled => "disabled",
                };
                ItemRenderData {
                    kind: kind.to_string(),
                    page,
                    label: item.label.clone(),
                    state: state.to_string(),
                }
            })
            .collect();

        RenderData {
            version: list.version,
            sizing_class: list.sizing_class.clone(),
            current_page,
            items,
        }
    }
}
