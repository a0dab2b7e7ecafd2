use crate::error::{Result, SyncError};
use crate::model::TaskId;

/// Per-task outcome of a clear-all run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearReport {
    /// Deleted on the server, in request order
    pub deleted: Vec<TaskId>,
    /// Still present on the server
    pub failed: Vec<(TaskId, SyncError)>,
}

impl ClearReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Notification for a partial run
    pub fn failure_message(&self) -> Option<String> {
        let (_, first) = self.failed.first()?;
        Some(format!(
            "{} de {} tarefas não puderam ser removidas ({})",
            self.failed.len(),
            self.deleted.len() + self.failed.len(),
            first
        ))
    }

    /// `Err` with the first failure, if any
    pub fn into_result(self) -> Result<()> {
        match self.failed.into_iter().next() {
            Some((_, e)) => Err(e),
            None => Ok(()),
        }
    }
}
