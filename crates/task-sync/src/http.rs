//! HTTP Gateway
//!
//! `TaskApi` over the task service's REST endpoints. Runs on top of the
//! browser's fetch on `wasm32` and on hyper natively.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use crate::api::{endpoint_url, RequestOptions, TaskApi};
use crate::config::ApiConfig;
use crate::error::{Result, SyncError};
use crate::model::{NewTask, Task, TaskId, TaskUpdate};

#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    config: ApiConfig,
}

impl HttpGateway {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn url(&self, suffix: &str) -> String {
        endpoint_url(self.config.base_url(), suffix)
    }

    /// Send one request and parse its JSON body.
    ///
    /// `Ok(None)` for 204 and for an empty 2xx body. Non-2xx statuses become
    /// [`SyncError::Request`].
    pub async fn request<T: DeserializeOwned>(
        &self,
        suffix: &str,
        options: RequestOptions,
    ) -> Result<Option<T>> {
        let url = self.url(suffix);
        debug!(method = %options.method, %url, "sending request");

        let mut builder = self.client.request(options.method.clone(), &url);
        for (name, value) in options.merged_headers() {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &options.body {
            builder = builder.body(serde_json::to_string(body)?);
        }

        let response = builder.send().await.map_err(|e| {
            error!(method = %options.method, %url, error = %e, "request failed");
            SyncError::from(e)
        })?;

        let status = response.status();
        debug!(status = status.as_u16(), %url, "response received");

        if !status.is_success() {
            let err = SyncError::Request {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            };
            warn!(method = %options.method, %url, error = %err, "service rejected request");
            return Err(err);
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        let parsed = serde_json::from_str(&text).map_err(|e| {
            error!(%url, error = %e, "could not parse response body");
            SyncError::from(e)
        })?;
        debug!(%url, bytes = text.len(), "response parsed");
        Ok(Some(parsed))
    }
}

fn required<T>(body: Option<T>) -> Result<T> {
    body.ok_or_else(|| SyncError::Decode("resposta sem conteúdo".to_string()))
}

#[async_trait(?Send)]
impl TaskApi for HttpGateway {
    async fn list(&self) -> Result<Vec<Task>> {
        Ok(self.request("", RequestOptions::get()).await?.unwrap_or_default())
    }

    async fn create(&self, task: &NewTask) -> Result<Task> {
        let body = serde_json::to_value(task)?;
        required(self.request("", RequestOptions::post(body)).await?)
    }

    async fn toggle(&self, id: &TaskId) -> Result<Task> {
        let suffix = format!("/{}/toggle", id.path_segment());
        required(self.request(&suffix, RequestOptions::patch()).await?)
    }

    async fn update(&self, id: &TaskId, task: &TaskUpdate) -> Result<Task> {
        let suffix = format!("/{}", id.path_segment());
        let body = serde_json::to_value(task)?;
        required(self.request(&suffix, RequestOptions::put(body)).await?)
    }

    async fn delete(&self, id: &TaskId) -> Result<()> {
        let suffix = format!("/{}", id.path_segment());
        self.request::<serde_json::Value>(&suffix, RequestOptions::delete())
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_urls() {
        let gateway = HttpGateway::new(ApiConfig::new("http://localhost:3000/api/tarefas/"));
        assert_eq!(gateway.url(""), "http://localhost:3000/api/tarefas");
        assert_eq!(
            gateway.url(&format!("/{}/toggle", TaskId::Number(4).path_segment())),
            "http://localhost:3000/api/tarefas/4/toggle"
        );
    }
}
