//! Interaction Dispatch
//!
//! Turns raw UI events (attribute values, key presses) into typed commands.
//! Each command maps to exactly one controller operation.

use crate::model::{Filter, TaskId};
use crate::render::ListView;

/// What a click inside a task row asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemAction {
    Toggle,
    Edit,
    Delete,
}

impl ItemAction {
    /// Value of the `data-action` attribute
    pub fn attr(&self) -> &'static str {
        match self {
            ItemAction::Toggle => "toggle",
            ItemAction::Edit => "edit",
            ItemAction::Delete => "delete",
        }
    }

    pub fn from_attr(s: &str) -> Option<Self> {
        match s {
            "toggle" => Some(ItemAction::Toggle),
            "edit" => Some(ItemAction::Edit),
            "delete" => Some(ItemAction::Delete),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Load,
    Add { title: String, description: String },
    Item(TaskId, ItemAction),
    SetFilter(Filter),
    ClearAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Title,
    Description,
}

/// Enter submits from the title; the description needs Ctrl+Enter so plain
/// Enter can still break lines.
pub fn submits(field: InputField, key: &str, ctrl: bool) -> bool {
    match field {
        InputField::Title => key == "Enter",
        InputField::Description => key == "Enter" && ctrl,
    }
}

/// Resolve a delegated click on the list.
///
/// `item_key` is the `data-id` of the enclosing row, `action` the
/// `data-action` of the clicked control. Clicks outside a known row or
/// outside a control resolve to nothing.
pub fn resolve_item_click(
    view: &ListView,
    item_key: Option<&str>,
    action: Option<&str>,
) -> Option<Command> {
    let row = view.find_row(item_key?)?;
    let action = ItemAction::from_attr(action?)?;
    Some(Command::Item(row.id.clone(), action))
}

/// Resolve a delegated click on the filter bar from the button's `data-filter`
pub fn resolve_filter_click(name: Option<&str>) -> Option<Command> {
    name.and_then(Filter::from_name).map(Command::SetFilter)
}
