//! List Footer
//!
//! Task counts and the clear-all button.

use leptos::prelude::*;
use task_sync::Command;

use crate::context::use_app_context;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn ListFooter() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();

    view! {
        <div class="list-footer">
            <span class="task-count">{move || store.list().with(|list| list.summary.label())}</span>
            <button id="clear-all-btn" class="clear-all-btn" on:click=move |_| ctx.send(Command::ClearAll)>
                "Limpar tudo"
            </button>
        </div>
    }
}
