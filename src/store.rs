//! UI State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity. The controller
//! writes rendered lists here; components only read.

use leptos::prelude::*;
use reactive_stores::Store;
use task_sync::ListView;

#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Last list rendered by the controller
    pub list: ListView,
    /// Title input contents
    pub title_input: String,
    /// Description textarea contents
    pub description_input: String,
}

pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}
