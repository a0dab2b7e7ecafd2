//! New Task Form
//!
//! Title input, optional description and the add button.

use leptos::prelude::*;
use task_sync::dispatch::submits;
use task_sync::{Command, InputField};

use crate::context::use_app_context;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();

    // Inputs are cleared by the controller once the task exists on the server
    let submit = move || {
        ctx.send(Command::Add {
            title: store.title_input().get_untracked(),
            description: store.description_input().get_untracked(),
        });
    };

    let on_key = move |field: InputField, ev: web_sys::KeyboardEvent| {
        if submits(field, &ev.key(), ev.ctrl_key()) {
            ev.prevent_default();
            submit();
        }
    };

    view! {
        <div class="input-section">
            <input
                id="task-input"
                type="text"
                placeholder="Adicionar nova tarefa..."
                prop:value=move || store.title_input().get()
                on:input=move |ev| store.title_input().set(event_target_value(&ev))
                on:keydown=move |ev| on_key(InputField::Title, ev)
            />
            <textarea
                id="task-description"
                placeholder="Descrição (opcional, Ctrl+Enter para adicionar)"
                prop:value=move || store.description_input().get()
                on:input=move |ev| store.description_input().set(event_target_value(&ev))
                on:keydown=move |ev| on_key(InputField::Description, ev)
            ></textarea>
            <button id="add-task-btn" class="add-btn" on:click=move |_| submit()>
                "Adicionar"
            </button>
        </div>
    }
}
