//! Browser host: binds the behaviors to `web_sys` and wires their events.
//!
//! Call `start()` (or `startWithConfig(...)`) once from the page bootstrap.
//! Listeners stay registered until `stop()` or the next start.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::PageConfig;
use crate::dom::{ClassList, Document};
use crate::error::{Error, Result};
use crate::page::{install_with, PageEnhancements};
use crate::storage::{KeyValueStore, MemoryStore};
use crate::theme::ThemeToggle;

impl From<Error> for JsValue {
    fn from(e: Error) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

fn js_err(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

// ============ DOM bindings ============

#[derive(Clone)]
pub struct WebElement(web_sys::Element);

impl WebElement {
    fn event_target(&self) -> web_sys::EventTarget {
        self.0.clone().into()
    }
}

impl ClassList for WebElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }
}

pub struct WebDocument(web_sys::Document);

impl Document for WebDocument {
    type Element = WebElement;

    fn query_selector(&self, selector: &str) -> Option<WebElement> {
        match self.0.query_selector(selector) {
            Ok(found) => found.map(WebElement),
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("Invalid selector {:?}: {}", selector, js_err(e)).into(),
                );
                None
            }
        }
    }

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.0.get_element_by_id(id).map(WebElement)
    }

    fn body(&self) -> Option<WebElement> {
        self.0
            .body()
            .map(|body| WebElement(web_sys::Element::from(body)))
    }
}

// ============ localStorage ============

pub struct LocalStorage(web_sys::Storage);

impl LocalStorage {
    pub fn open() -> Result<Self> {
        let window = web_sys::window().ok_or(Error::NoWindow)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self(storage)),
            // Blocked by privacy settings or sandboxing
            Ok(None) | Err(_) => Err(Error::StorageUnavailable),
        }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.0
            .get_item(key)
            .map_err(|e| Error::Storage(js_err(e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.0
            .set_item(key, value)
            .map_err(|e| Error::Storage(js_err(e)))
    }
}

fn open_store() -> Box<dyn KeyValueStore> {
    match LocalStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            web_sys::console::warn_1(
                &format!("Theme preference will not persist: {}", e).into(),
            );
            Box::new(MemoryStore::new())
        }
    }
}

// ============ Event wiring ============

type WebThemeToggle = ThemeToggle<WebElement, Box<dyn KeyValueStore>>;

/// Registered listener, removed from its target on drop.
struct Listener {
    target: web_sys::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl Listener {
    fn attach(
        target: web_sys::EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut(web_sys::Event)>,
    ) -> Result<Self> {
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| Error::Dom(js_err(e)))?;
        Ok(Self {
            target,
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Everything one `start()` put on the page.
struct ActivePage {
    _listeners: Vec<Listener>,
    theme: Option<Rc<WebThemeToggle>>,
}

thread_local! {
    static ACTIVE: RefCell<Option<ActivePage>> = RefCell::new(None);
    // Bumped by every start/stop so a deferred DOMContentLoaded install can
    // tell it has been superseded.
    static GENERATION: Cell<u64> = Cell::new(0);
}

fn attach(config: &PageConfig) -> Result<ActivePage> {
    let window = web_sys::window().ok_or(Error::NoWindow)?;
    let document = window.document().ok_or(Error::NoDocument)?;

    let PageEnhancements {
        scroll,
        theme,
        theme_control,
    } = install_with(&WebDocument(document), open_store, config);

    let mut listeners = Vec::new();

    if let Some(watcher) = scroll {
        let scroll_window = window.clone();
        let on_scroll = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let offset = scroll_window.scroll_y().unwrap_or_default();
            watcher.on_scroll(offset);
        }) as Box<dyn FnMut(_)>);
        listeners.push(Listener::attach(window.clone().into(), "scroll", on_scroll)?);
    }

    let theme = theme.map(Rc::new);
    if let (Some(toggle), Some(control)) = (theme.clone(), theme_control) {
        let on_click = Closure::wrap(Box::new(move |_: web_sys::Event| {
            toggle.toggle();
        }) as Box<dyn FnMut(_)>);
        listeners.push(Listener::attach(control.event_target(), "click", on_click)?);
    }

    Ok(ActivePage {
        _listeners: listeners,
        theme,
    })
}

fn next_generation() -> u64 {
    GENERATION.with(|g| {
        let next = g.get() + 1;
        g.set(next);
        next
    })
}

fn activate(config: &PageConfig) -> Result<()> {
    let page = attach(config)?;
    ACTIVE.with(|active| *active.borrow_mut() = Some(page));
    Ok(())
}

fn start_page(config: PageConfig) -> Result<()> {
    // Release listeners from a previous start before wiring new ones
    ACTIVE.with(|active| active.borrow_mut().take());
    let generation = next_generation();

    let window = web_sys::window().ok_or(Error::NoWindow)?;
    let document = window.document().ok_or(Error::NoDocument)?;

    if document.ready_state() != "loading" {
        return activate(&config);
    }

    let on_ready = Closure::once_into_js(move || {
        if GENERATION.with(|g| g.get()) != generation {
            return;
        }
        if let Err(e) = activate(&config) {
            web_sys::console::error_1(&format!("Page enhancements failed: {}", e).into());
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        .map_err(|e| Error::Dom(js_err(e)))?;
    Ok(())
}

// ============ Exports ============

/// Install with the stock UIKit selectors and storage key.
#[wasm_bindgen]
pub fn start() -> std::result::Result<(), JsValue> {
    start_page(PageConfig::default())?;
    Ok(())
}

/// Install with a partial config object; missing fields keep their defaults.
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(config: JsValue) -> std::result::Result<(), JsValue> {
    let config = if config.is_undefined() || config.is_null() {
        PageConfig::default()
    } else {
        serde_wasm_bindgen::from_value::<PageConfig>(config)
            .map_err(|e| Error::InvalidConfig(e.to_string()))?
    };
    config.validate()?;
    start_page(config)?;
    Ok(())
}

/// Remove every listener registered by the last start.
#[wasm_bindgen]
pub fn stop() {
    next_generation();
    ACTIVE.with(|active| active.borrow_mut().take());
}

/// "light" or "dark", or undefined when the page has no theme toggle.
#[wasm_bindgen(js_name = currentTheme)]
pub fn current_theme() -> Option<String> {
    ACTIVE.with(|active| {
        active
            .borrow()
            .as_ref()
            .and_then(|page| page.theme.as_ref())
            .map(|toggle| toggle.current().as_str().to_string())
    })
}

#[wasm_bindgen]
pub fn version() -> String {
    format!("{} ({})", crate::VERSION, crate::GIT_SHA)
}
