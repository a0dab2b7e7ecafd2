//! Task Item
//!
//! One row of the list. Controls carry `data-action`; the row carries
//! `data-id`.

use leptos::prelude::*;
use task_sync::{ItemAction, TaskRow};

#[component]
pub fn TaskItem(row: TaskRow) -> impl IntoView {
    let class = row.class();
    let TaskRow { key, title, description, completed, created, .. } = row;

    view! {
        <li class=class data-id=key>
            <input
                type="checkbox"
                class="task-checkbox"
                data-action=ItemAction::Toggle.attr()
                prop:checked=completed
            />
            <div class="task-content">
                <span class="task-title">{title}</span>
                {description.map(|text| view! { <p class="task-description-display">{text}</p> })}
                {created.map(|at| view! { <small class="task-created">"Criada em " {at}</small> })}
            </div>
            <div class="task-actions">
                <button class="edit-btn" data-action=ItemAction::Edit.attr() title="Editar">
                    <i class="fas fa-edit"></i>
                </button>
                <button class="delete-btn" data-action=ItemAction::Delete.attr() title="Remover">
                    <i class="fas fa-trash-alt"></i>
                </button>
            </div>
        </li>
    }
}
