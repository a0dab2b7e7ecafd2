//! Tarefas Frontend App
//!
//! Single-page layout: new task form, filter bar, task list, footer.

use leptos::prelude::*;
use reactive_stores::Store;
use task_sync::{Command, HttpGateway, TaskListController};
use tracing::info;

use crate::browser::{BrowserNotifier, StoreView};
use crate::components::{FilterBar, ListFooter, NewTaskForm, TaskList};
use crate::config;
use crate::context::AppContext;
use crate::store::UiState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(UiState::default());
    provide_context(store);

    let api_config = config::api_config();
    info!(base_url = api_config.base_url(), "starting");
    let controller = TaskListController::new(
        HttpGateway::new(api_config),
        BrowserNotifier,
        StoreView::new(store),
    );
    let ctx = AppContext::new(controller);
    provide_context(ctx);

    // Load tasks on mount
    Effect::new(move |_| ctx.send(Command::Load));

    view! {
        <div class="container">
            <header class="app-header">
                <h1>"Minhas Tarefas"</h1>
            </header>
            <NewTaskForm />
            <FilterBar />
            <TaskList />
            <ListFooter />
        </div>
    }
}
