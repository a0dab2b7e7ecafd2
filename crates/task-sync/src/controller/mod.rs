//! Task List Controller
//!
//! Owns the task cache and the current filter. Every operation validates,
//! calls the gateway, patches the cache from the server's answer, then
//! re-renders. The cache is only ever patched after a successful response.

mod batch;
#[cfg(test)]
mod tests;

pub use batch::ClearReport;

use tracing::{debug, error, info, warn};

use crate::api::TaskApi;
use crate::collection::TaskCollection;
use crate::dispatch::{Command, ItemAction};
use crate::error::{Result, SyncError};
use crate::model::{Filter, NewTask, Task, TaskId, TaskUpdate};
use crate::ports::{Notifier, TaskView};
use crate::render::ListView;

pub const EMPTY_TITLE_ON_ADD: &str = "Por favor, digite um título para a tarefa!";
pub const EMPTY_TITLE_ON_EDIT: &str = "O título não pode ser vazio!";
pub const EDIT_TITLE_PROMPT: &str = "Editar título da tarefa:";
pub const EDIT_DESCRIPTION_PROMPT: &str = "Editar descrição da tarefa (opcional):";
pub const CONFIRM_DELETE: &str = "Tem certeza que deseja remover esta tarefa?";
pub const CONFIRM_CLEAR_ALL: &str = "Tem certeza que deseja remover TODAS as tarefas?";

pub struct TaskListController<A, N, V> {
    api: A,
    notifier: N,
    view: V,
    tasks: TaskCollection,
    filter: Filter,
}

impl<A, N, V> TaskListController<A, N, V>
where
    A: TaskApi,
    N: Notifier,
    V: TaskView,
{
    /// Starts empty with the `All` filter; call [`load`](Self::load) to populate
    pub fn new(api: A, notifier: N, view: V) -> Self {
        Self {
            api,
            notifier,
            view,
            tasks: TaskCollection::new(),
            filter: Filter::All,
        }
    }

    pub fn tasks(&self) -> &TaskCollection {
        &self.tasks
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn current_view(&self) -> ListView {
        ListView::project(&self.tasks, self.filter)
    }

    fn render(&self) {
        self.view.render(&self.current_view());
    }

    /// Log and notify a failure at the operation boundary, handing it back
    fn fail(&self, operation: &'static str, e: SyncError) -> SyncError {
        match &e {
            SyncError::UnknownTask(_) | SyncError::Validation(_) => {
                warn!(operation, error = %e, "operation rejected")
            }
            _ => error!(operation, error = %e, "operation failed"),
        }
        if let Some(message) = e.user_message() {
            self.notifier.alert(&message);
        }
        e
    }

    fn require_known(&self, operation: &'static str, id: &TaskId) -> Result<()> {
        if self.tasks.contains(id) {
            Ok(())
        } else {
            Err(self.fail(operation, SyncError::UnknownTask(id.clone())))
        }
    }

    /// Replace the cache with the server listing. On failure the list is
    /// emptied so the page stays usable.
    pub async fn load(&mut self) -> Result<usize> {
        info!("loading tasks");
        match self.api.list().await {
            Ok(tasks) => {
                self.tasks.replace_all(tasks);
                info!(count = self.tasks.len(), "tasks loaded");
                self.render();
                Ok(self.tasks.len())
            }
            Err(e) => {
                let e = self.fail("load", e);
                self.tasks.clear();
                self.render();
                Err(e)
            }
        }
    }

    pub async fn add(&mut self, title: &str, description: &str) -> Result<Task> {
        let title = title.trim();
        if title.is_empty() {
            return Err(self.fail("add", SyncError::validation(EMPTY_TITLE_ON_ADD)));
        }

        let new_task = NewTask::new(title, description.trim());
        debug!(title = %new_task.title, "creating task");
        let created = match self.api.create(&new_task).await {
            Ok(task) => task,
            Err(e) => return Err(self.fail("add", e)),
        };

        info!(id = %created.id, "task created");
        self.tasks.prepend(created.clone());
        self.view.clear_inputs();
        self.render();
        Ok(created)
    }

    pub async fn toggle(&mut self, id: &TaskId) -> Result<Task> {
        self.require_known("toggle", id)?;

        debug!(%id, "toggling task");
        let updated = match self.api.toggle(id).await {
            Ok(task) => task,
            Err(e) => return Err(self.fail("toggle", e)),
        };

        info!(%id, completed = updated.completed, "task toggled");
        self.tasks.replace(updated.clone());
        self.render();
        Ok(updated)
    }

    /// Prompt for a new title and description, then PUT the full task.
    /// `Ok(None)` when the user cancels either prompt.
    pub async fn edit(&mut self, id: &TaskId) -> Result<Option<Task>> {
        let Some(task) = self.tasks.get(id).cloned() else {
            return Err(self.fail("edit", SyncError::UnknownTask(id.clone())));
        };

        let Some(title) = self.notifier.prompt(EDIT_TITLE_PROMPT, &task.title) else {
            debug!(%id, "edit cancelled at title");
            return Ok(None);
        };
        let title = title.trim();
        if title.is_empty() {
            return Err(self.fail("edit", SyncError::validation(EMPTY_TITLE_ON_EDIT)));
        }

        let Some(description) = self.notifier.prompt(EDIT_DESCRIPTION_PROMPT, &task.description)
        else {
            debug!(%id, "edit cancelled at description");
            return Ok(None);
        };

        let update = TaskUpdate::edit_of(&task, title, description.trim());
        debug!(%id, "updating task");
        let updated = match self.api.update(id, &update).await {
            Ok(task) => task,
            Err(e) => return Err(self.fail("edit", e)),
        };

        info!(%id, "task edited");
        self.tasks.replace(updated.clone());
        self.render();
        Ok(Some(updated))
    }

    /// `Ok(false)` when the user declines the confirmation
    pub async fn delete(&mut self, id: &TaskId) -> Result<bool> {
        self.require_known("delete", id)?;
        if !self.notifier.confirm(CONFIRM_DELETE) {
            debug!(%id, "delete declined");
            return Ok(false);
        }

        debug!(%id, "deleting task");
        if let Err(e) = self.api.delete(id).await {
            return Err(self.fail("delete", e));
        }

        info!(%id, "task deleted");
        self.tasks.remove(id);
        self.render();
        Ok(true)
    }

    /// Delete every cached task, one request at a time.
    ///
    /// A failed delete does not stop the run. Afterwards only the tasks the
    /// server actually deleted leave the cache, so it keeps mirroring the
    /// server. `None` when the user declines the confirmation.
    pub async fn clear_all(&mut self) -> Option<ClearReport> {
        if !self.notifier.confirm(CONFIRM_CLEAR_ALL) {
            debug!("clear all declined");
            return None;
        }

        let ids = self.tasks.ids();
        info!(count = ids.len(), "clearing all tasks");

        let mut report = ClearReport::default();
        for id in ids {
            match self.api.delete(&id).await {
                Ok(()) => report.deleted.push(id),
                Err(e) => {
                    warn!(%id, error = %e, "delete failed during clear all");
                    report.failed.push((id, e));
                }
            }
        }

        self.tasks.remove_all(&report.deleted);
        self.render();

        if let Some(message) = report.failure_message() {
            error!(
                deleted = report.deleted.len(),
                failed = report.failed.len(),
                "clear all incomplete"
            );
            self.notifier.alert(&message);
        } else {
            info!(deleted = report.deleted.len(), "all tasks cleared");
        }
        Some(report)
    }

    pub fn set_filter(&mut self, filter: Filter) {
        debug!(filter = filter.name(), "filter changed");
        self.filter = filter;
        self.render();
    }

    /// Run the single operation a command stands for
    pub async fn dispatch(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Load => self.load().await.map(drop),
            Command::Add { title, description } => self.add(&title, &description).await.map(drop),
            Command::Item(id, ItemAction::Toggle) => self.toggle(&id).await.map(drop),
            Command::Item(id, ItemAction::Edit) => self.edit(&id).await.map(drop),
            Command::Item(id, ItemAction::Delete) => self.delete(&id).await.map(drop),
            Command::SetFilter(filter) => {
                self.set_filter(filter);
                Ok(())
            }
            Command::ClearAll => match self.clear_all().await {
                Some(report) => report.into_result(),
                None => Ok(()),
            },
        }
    }
}
