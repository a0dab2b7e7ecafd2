//! Task List
//!
//! Redrawn from scratch on every render. Row controls are resolved through
//! one click handler on the list element.

use leptos::prelude::*;
use task_sync::dispatch::resolve_item_click;
use task_sync::{Command, ItemAction, ListBody};

use crate::browser::{closest_attr, event_element};
use crate::components::TaskItem;
use crate::context::use_app_context;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();

    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(target) = event_element(&ev) else {
            return;
        };
        let item_key = closest_attr(&target, "[data-id]", "data-id");
        let action = closest_attr(&target, "[data-action]", "data-action");
        let command = store
            .list()
            .with_untracked(|list| resolve_item_click(list, item_key.as_deref(), action.as_deref()));

        if let Some(command) = command {
            // The checkbox shows the server's state after the next render
            if matches!(command, Command::Item(_, ItemAction::Toggle)) {
                ev.prevent_default();
            }
            ctx.send(command);
        }
    };

    view! {
        <ul id="task-list" class="task-list" on:click=on_click>
            {move || store.list().with(|list| match &list.body {
                ListBody::Placeholder(placeholder) => {
                    view! { <li class="no-tasks-message">{placeholder.message()}</li> }.into_any()
                }
                ListBody::Rows(rows) => rows
                    .iter()
                    .cloned()
                    .map(|row| view! { <TaskItem row=row /> })
                    .collect_view()
                    .into_any(),
            })}
        </ul>
    }
}
