use thiserror::Error;

use crate::model::TaskId;

pub type Result<T> = std::result::Result<T, SyncError>;

/// Everything an operation can fail with. User cancellation is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// Rejected locally before any request was made
    #[error("{0}")]
    Validation(String),
    /// The service answered with a non-2xx status
    #[error("Erro {status}: {status_text}")]
    Request { status: u16, status_text: String },
    #[error("falha de rede: {0}")]
    Network(String),
    #[error("resposta inválida do servidor: {0}")]
    Decode(String),
    #[error("tarefa {0} não está na lista")]
    UnknownTask(TaskId),
}

impl SyncError {
    pub fn validation(message: impl Into<String>) -> Self {
        SyncError::Validation(message.into())
    }

    /// Failures that came from talking to the service
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            SyncError::Request { .. } | SyncError::Network(_) | SyncError::Decode(_)
        )
    }

    /// Text for the blocking notification, if this failure is shown to the user
    pub fn user_message(&self) -> Option<String> {
        match self {
            SyncError::Validation(message) => Some(message.clone()),
            e if e.is_remote() => Some(format!("Erro ao conectar com o servidor: {}", e)),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            SyncError::Decode(e.to_string())
        } else {
            SyncError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(e: serde_json::Error) -> Self {
        SyncError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_message() {
        let e = SyncError::Request { status: 404, status_text: "Not Found".into() };
        assert_eq!(e.to_string(), "Erro 404: Not Found");
        assert_eq!(
            e.user_message().as_deref(),
            Some("Erro ao conectar com o servidor: Erro 404: Not Found")
        );
    }

    #[test]
    fn test_unknown_task_is_silent() {
        let e = SyncError::UnknownTask(TaskId::Number(5));
        assert!(!e.is_remote());
        assert!(e.user_message().is_none());
    }

    #[test]
    fn test_validation_message_shown_verbatim() {
        let e = SyncError::validation("O título não pode ser vazio!");
        assert_eq!(e.user_message().as_deref(), Some("O título não pode ser vazio!"));
    }
}
