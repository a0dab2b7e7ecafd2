//! Application Context
//!
//! Shares the task controller with every component via the Leptos Context API.

use std::rc::Rc;

use futures::lock::Mutex;
use leptos::prelude::*;
use leptos::task::spawn_local;
use task_sync::{Command, HttpGateway, TaskListController};
use tracing::debug;

use crate::browser::{BrowserNotifier, StoreView};

pub type AppController = TaskListController<HttpGateway, BrowserNotifier, StoreView>;

#[derive(Clone, Copy)]
pub struct AppContext {
    /// Locked for the whole of an operation, so operations run one after another
    controller: StoredValue<Rc<Mutex<AppController>>, LocalStorage>,
}

impl AppContext {
    pub fn new(controller: AppController) -> Self {
        Self {
            controller: StoredValue::new_local(Rc::new(Mutex::new(controller))),
        }
    }

    /// Run a command once any operation already in flight has finished.
    /// Failures were logged and shown to the user by the controller.
    pub fn send(&self, command: Command) {
        let controller = self.controller.get_value();
        spawn_local(async move {
            let mut controller = controller.lock().await;
            if let Err(e) = controller.dispatch(command).await {
                debug!(error = %e, "command ended with an error");
            }
        });
    }
}

/// Get the app context from context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
