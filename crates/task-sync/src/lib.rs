//! Task Sync
//!
//! Client-side core of the Tarefas task list:
//! - model / collection: tasks as the service returns them, and the local cache
//! - api / http: the gateway contract and its reqwest implementation
//! - controller: the synchronization operations
//! - render / dispatch: list projection and UI event resolution
//!
//! Nothing here touches the DOM; the browser app plugs in through `ports`.

pub mod api;
pub mod collection;
pub mod config;
pub mod controller;
pub mod dispatch;
pub mod error;
pub mod http;
pub mod model;
pub mod ports;
pub mod render;

pub use api::TaskApi;
pub use collection::TaskCollection;
pub use config::ApiConfig;
pub use controller::{ClearReport, TaskListController};
pub use dispatch::{Command, InputField, ItemAction};
pub use error::{Result, SyncError};
pub use http::HttpGateway;
pub use model::{Filter, NewTask, Priority, Task, TaskId, TaskUpdate};
pub use ports::{Notifier, TaskView};
pub use render::{ListBody, ListView, Placeholder, Summary, TaskRow};
