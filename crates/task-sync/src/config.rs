//! Gateway configuration

/// Task resource served by the companion service when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api/tarefas";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Trailing slashes are dropped so suffix joining stays predictable
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        Self {
            base_url: trimmed.to_string(),
        }
    }

    /// First non-blank source wins, highest priority first; falls back to
    /// [`DEFAULT_BASE_URL`].
    pub fn from_sources<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        sources
            .into_iter()
            .flatten()
            .find(|source| !source.as_ref().trim().is_empty())
            .map(|source| Self::new(source.as_ref()))
            .unwrap_or_default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
