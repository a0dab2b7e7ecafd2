//! Task Models
//!
//! Data structures matching the task service's JSON (Portuguese field names on the wire).

use std::fmt;

use chrono::NaiveDateTime;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Deserializer, Serialize};

/// Characters escaped when an id is used as a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Timestamp layout used by the service for `criado` / `atualizado`
const SERVER_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";

/// Server-assigned task identifier.
///
/// The service hands out integers, but ids are opaque to the client, so a
/// string id is accepted too. A number equals the string of its canonical
/// decimal form (so `12 == "12"` but `12 != "012"`), which keeps ids read
/// back from DOM attributes interchangeable with the ones parsed from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Number(i64),
    Text(String),
}

impl TaskId {
    /// Id encoded for use as one URL path segment
    pub fn path_segment(&self) -> String {
        match self {
            TaskId::Number(n) => n.to_string(),
            TaskId::Text(s) => utf8_percent_encode(s, PATH_SEGMENT).to_string(),
        }
    }
}

impl PartialEq for TaskId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TaskId::Number(a), TaskId::Number(b)) => a == b,
            (TaskId::Text(a), TaskId::Text(b)) => a == b,
            (TaskId::Number(n), TaskId::Text(s)) | (TaskId::Text(s), TaskId::Number(n)) => {
                *s == n.to_string()
            }
        }
    }
}

impl Eq for TaskId {}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Number(n) => write!(f, "{}", n),
            TaskId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for TaskId {
    fn from(value: i64) -> Self {
        TaskId::Number(value)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        TaskId::Text(value.to_string())
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        TaskId::Text(value)
    }
}

/// Task priority label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Baixa,
    #[default]
    Media,
    Alta,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Baixa => "baixa",
            Priority::Media => "media",
            Priority::Alta => "alta",
        }
    }

    /// Lenient parse; anything unrecognised reads as the default
    pub fn from_label(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "baixa" => Priority::Baixa,
            "alta" => Priority::Alta,
            _ => Priority::Media,
        }
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        Priority::from_label(&value)
    }
}

/// `null` and unknown labels read as the default, like a missing field
impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?
            .map(Priority::from)
            .unwrap_or_default())
    }
}

/// A task as cached by the client. Always a copy of the last server response for its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao", default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(rename = "completo", default)]
    pub completed: bool,
    #[serde(rename = "prioridade", default)]
    pub priority: Priority,
    #[serde(rename = "criado", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "atualizado", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Task {
    /// Creation time, when the server sent one in its usual layout
    pub fn created(&self) -> Option<NaiveDateTime> {
        self.created_at
            .as_deref()
            .and_then(|raw| NaiveDateTime::parse_from_str(raw, SERVER_TIMESTAMP).ok())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `POST /`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "prioridade")]
    pub priority: Priority,
}

impl NewTask {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            priority: Priority::default(),
        }
    }
}

/// Body of `PUT /{id}`: the full representation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskUpdate {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "completo")]
    pub completed: bool,
    #[serde(rename = "prioridade")]
    pub priority: Priority,
}

impl TaskUpdate {
    /// Replace title and description, carrying completion and priority over from `task`
    pub fn edit_of(task: &Task, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            completed: task.completed,
            priority: task.priority,
        }
    }
}

/// Visibility filter for the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Pending,
    Completed,
}

impl Filter {
    /// Button order in the filter bar
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Pending, Filter::Completed];

    /// Name carried by the `data-filter` attribute
    pub fn name(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Pending => "pending",
            Filter::Completed => "completed",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "all" => Some(Filter::All),
            "pending" => Some(Filter::Pending),
            "completed" => Some(Filter::Completed),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "Todas",
            Filter::Pending => "Pendentes",
            Filter::Completed => "Concluídas",
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Pending => !task.completed,
            Filter::Completed => task.completed,
        }
    }
}
