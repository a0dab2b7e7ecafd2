//! Browser Bindings
//!
//! Blocking dialogs for the controller's notifications, the store-backed
//! view, and small DOM helpers for delegated event handling.

use leptos::prelude::*;
use task_sync::{ListView, Notifier, TaskView};
use tracing::warn;
use wasm_bindgen::JsCast;

use crate::store::{UiStateStoreFields, UiStore};

/// `window.alert` / `window.confirm` / `window.prompt`
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            warn!(error = ?e, "alert failed");
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn prompt(&self, message: &str, default: &str) -> Option<String> {
        web_sys::window()
            .and_then(|window| window.prompt_with_message_and_default(message, default).ok())
            .flatten()
    }
}

/// Renders by replacing the list in the UI store
pub struct StoreView {
    store: UiStore,
}

impl StoreView {
    pub fn new(store: UiStore) -> Self {
        Self { store }
    }
}

impl TaskView for StoreView {
    fn render(&self, view: &ListView) {
        self.store.list().set(view.clone());
    }

    fn clear_inputs(&self) {
        self.store.title_input().set(String::new());
        self.store.description_input().set(String::new());
    }
}

/// Element the event was dispatched on
pub fn event_element(ev: &web_sys::Event) -> Option<web_sys::Element> {
    ev.target()?.dyn_into::<web_sys::Element>().ok()
}

/// `attr` of the nearest ancestor-or-self matching `selector`
pub fn closest_attr(element: &web_sys::Element, selector: &str, attr: &str) -> Option<String> {
    element
        .closest(selector)
        .ok()
        .flatten()
        .and_then(|found| found.get_attribute(attr))
}

/// `content` of `<meta name="...">` in the host page
pub fn meta_content(name: &str) -> Option<String> {
    web_sys::window()?
        .document()?
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()
        .flatten()?
        .get_attribute("content")
}
