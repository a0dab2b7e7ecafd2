//! UI Components
//!
//! Leptos components for the task list page.

mod filter_bar;
mod list_footer;
mod new_task_form;
mod task_item;
mod task_list;

pub use filter_bar::FilterBar;
pub use list_footer::ListFooter;
pub use new_task_form::NewTaskForm;
pub use task_item::TaskItem;
pub use task_list::TaskList;
