//! Filter Bar
//!
//! One button per filter; clicks are handled once on the container.

use leptos::prelude::*;
use task_sync::dispatch::resolve_filter_click;
use task_sync::Filter;

use crate::browser::{closest_attr, event_element};
use crate::context::use_app_context;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();
    let active = move || store.list().with(|list| list.filter);

    let on_click = move |ev: web_sys::MouseEvent| {
        let name = event_element(&ev).and_then(|el| closest_attr(&el, "[data-filter]", "data-filter"));
        if let Some(command) = resolve_filter_click(name.as_deref()) {
            ctx.send(command);
        }
    };

    view! {
        <div class="filters-section" on:click=on_click>
            {Filter::ALL
                .into_iter()
                .map(|filter| {
                    view! {
                        <button
                            class=move || if active() == filter { "filter-btn active" } else { "filter-btn" }
                            data-filter=filter.name()
                        >
                            {filter.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
