//! List Projection
//!
//! Pure mapping from (collection, filter) to what the list shows.

use crate::collection::TaskCollection;
use crate::model::{Filter, Task, TaskId};

/// Display layout for creation dates
const CREATED_DISPLAY: &str = "%d/%m/%Y %H:%M";

/// Single item shown instead of rows when nothing passes the filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    /// The collection itself is empty
    NoTasksYet,
    /// Tasks exist, none match the filter
    NoneMatching(Filter),
}

impl Placeholder {
    pub fn message(&self) -> String {
        match self {
            Placeholder::NoTasksYet => {
                "Nenhuma tarefa adicionada ainda. Que tal começar uma nova?".to_string()
            }
            Placeholder::NoneMatching(filter) => {
                let state = match filter {
                    Filter::Pending => "pendente",
                    _ => "concluída",
                };
                format!("Nenhuma tarefa {} encontrada.", state)
            }
        }
    }
}

/// One visible task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    /// Value of the row's `data-id` attribute
    pub key: String,
    pub title: String,
    /// Only present for a non-empty description
    pub description: Option<String>,
    pub completed: bool,
    pub created: Option<String>,
}

impl TaskRow {
    fn from_task(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            key: task.id.to_string(),
            title: task.title.clone(),
            description: (!task.description.is_empty()).then(|| task.description.clone()),
            completed: task.completed,
            created: task
                .created()
                .map(|created| created.format(CREATED_DISPLAY).to_string()),
        }
    }

    pub fn class(&self) -> &'static str {
        if self.completed {
            "task-item completed"
        } else {
            "task-item"
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

impl Summary {
    fn of(tasks: &TaskCollection) -> Self {
        let completed = tasks.iter().filter(|task| task.completed).count();
        Self {
            total: tasks.len(),
            pending: tasks.len() - completed,
            completed,
        }
    }

    pub fn label(&self) -> String {
        format!(
            "{} · {} · {}",
            plural(self.total, "tarefa", "tarefas"),
            plural(self.pending, "pendente", "pendentes"),
            plural(self.completed, "concluída", "concluídas"),
        )
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListBody {
    Placeholder(Placeholder),
    Rows(Vec<TaskRow>),
}

/// Everything the list and its footer display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub filter: Filter,
    pub body: ListBody,
    pub summary: Summary,
}

impl ListView {
    pub fn project(tasks: &TaskCollection, filter: Filter) -> Self {
        let rows: Vec<TaskRow> = tasks.filtered(filter).map(TaskRow::from_task).collect();

        let body = if !rows.is_empty() {
            ListBody::Rows(rows)
        } else if tasks.is_empty() {
            ListBody::Placeholder(Placeholder::NoTasksYet)
        } else {
            ListBody::Placeholder(Placeholder::NoneMatching(filter))
        };

        Self {
            filter,
            body,
            summary: Summary::of(tasks),
        }
    }

    pub fn rows(&self) -> &[TaskRow] {
        match &self.body {
            ListBody::Rows(rows) => rows,
            ListBody::Placeholder(_) => &[],
        }
    }

    pub fn placeholder(&self) -> Option<&Placeholder> {
        match &self.body {
            ListBody::Placeholder(placeholder) => Some(placeholder),
            ListBody::Rows(_) => None,
        }
    }

    /// Row whose `data-id` is `key`
    pub fn find_row(&self, key: &str) -> Option<&TaskRow> {
        self.rows().iter().find(|row| row.key == key)
    }
}

impl Default for ListView {
    fn default() -> Self {
        Self::project(&TaskCollection::new(), Filter::All)
    }
}
