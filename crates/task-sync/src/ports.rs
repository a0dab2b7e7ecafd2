//! Controller Ports
//!
//! The interactive side-channel and the render target, kept out of the
//! controller so it runs without a display surface.

use crate::render::ListView;

/// Blocking user interaction: notifications, confirmations, text prompts
pub trait Notifier {
    fn alert(&self, message: &str);

    /// `true` when the user accepted
    fn confirm(&self, message: &str) -> bool;

    /// `None` when the user cancelled
    fn prompt(&self, message: &str, default: &str) -> Option<String>;
}

/// Where rendered lists go
pub trait TaskView {
    /// Replace everything currently shown with `view`
    fn render(&self, view: &ListView);

    /// Empty the title and description inputs after a successful add
    fn clear_inputs(&self);
}
