//! Task API
//!
//! The gateway contract the controller talks to, plus the request plumbing
//! shared by gateway implementations.

use async_trait::async_trait;
pub use reqwest::Method;
use serde_json::Value;

use crate::error::Result;
use crate::model::{NewTask, Task, TaskId, TaskUpdate};

pub const CONTENT_TYPE: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// One method per endpoint of the task service.
///
/// Futures are not required to be `Send`: in the browser they are driven by
/// the single-threaded executor.
#[async_trait(?Send)]
pub trait TaskApi {
    /// `GET /`
    async fn list(&self) -> Result<Vec<Task>>;
    /// `POST /`
    async fn create(&self, task: &NewTask) -> Result<Task>;
    /// `PATCH /{id}/toggle`
    async fn toggle(&self, id: &TaskId) -> Result<Task>;
    /// `PUT /{id}`
    async fn update(&self, id: &TaskId, task: &TaskUpdate) -> Result<Task>;
    /// `DELETE /{id}`
    async fn delete(&self, id: &TaskId) -> Result<()>;
}

/// Join the base resource URL with an endpoint suffix.
///
/// * `""` or `"/"` -> the base itself
/// * `"/1/toggle"` -> appended as is
/// * `"1"` -> appended after a `/`
pub fn endpoint_url(base: &str, suffix: &str) -> String {
    if suffix.is_empty() || suffix == "/" {
        base.to_string()
    } else if suffix.starts_with('/') {
        format!("{}{}", base, suffix)
    } else {
        format!("{}/{}", base, suffix)
    }
}

/// Method, extra headers and JSON body of one request
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: Vec::new(),
            body: None,
        }
    }
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post(body: Value) -> Self {
        Self::with_method(Method::POST).body(body)
    }

    pub fn put(body: Value) -> Self {
        Self::with_method(Method::PUT).body(body)
    }

    pub fn patch() -> Self {
        Self::with_method(Method::PATCH)
    }

    pub fn delete() -> Self {
        Self::with_method(Method::DELETE)
    }

    pub fn with_method(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// JSON content type first, then the caller's headers. A caller header
    /// with the same name (case-insensitive) replaces the default.
    pub fn merged_headers(&self) -> Vec<(String, String)> {
        let overridden = self
            .headers
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case(CONTENT_TYPE));

        let mut merged = Vec::with_capacity(self.headers.len() + 1);
        if !overridden {
            merged.push((CONTENT_TYPE.to_string(), JSON_CONTENT_TYPE.to_string()));
        }
        merged.extend(self.headers.iter().cloned());
        merged
    }
}
