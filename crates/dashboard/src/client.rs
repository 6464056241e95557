//! HTTP client for the TaskDash API.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use taskdash_core::api::{CreateTaskRequest, ErrorResponse, HealthResponse, UpdateTaskRequest};
use taskdash_core::Task;
use thiserror::Error;
use tracing::debug;

/// Default API location, matching the server's default port.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Errors surfaced by the dashboard's data layer.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    Validation(String),
}

impl ClientError {
    /// True when the server answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}

/// Result alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Thin wrapper over the task routes.
#[derive(Debug, Clone)]
pub struct TaskClient {
    base_url: String,
    http: Client,
}

impl TaskClient {
    /// Create a client for the API at `base_url` (e.g. `http://localhost:5000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET /tasks`
    pub async fn list_tasks(&self) -> ClientResult<Vec<Task>> {
        let response = self.http.get(self.url("/tasks")).send().await?;
        decode(response).await
    }

    /// `GET /tasks/:id`
    pub async fn get_task(&self, task_id: &str) -> ClientResult<Task> {
        let response = self
            .http
            .get(self.url(&format!("/tasks/{task_id}")))
            .send()
            .await?;
        decode(response).await
    }

    /// `POST /tasks`
    pub async fn create_task(&self, request: &CreateTaskRequest) -> ClientResult<Task> {
        debug!(title = ?request.title, "Creating task");
        let response = self
            .http
            .post(self.url("/tasks"))
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    /// `PUT /tasks/:id`
    pub async fn update_task(
        &self,
        task_id: &str,
        request: &UpdateTaskRequest,
    ) -> ClientResult<Task> {
        debug!(task_id, "Updating task");
        let response = self
            .http
            .put(self.url(&format!("/tasks/{task_id}")))
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    /// `DELETE /tasks/:id`
    pub async fn delete_task(&self, task_id: &str) -> ClientResult<()> {
        debug!(task_id, "Deleting task");
        let response = self
            .http
            .delete(self.url(&format!("/tasks/{task_id}")))
            .send()
            .await?;
        decode::<serde_json::Value>(response).await.map(|_| ())
    }

    /// `GET /health`
    pub async fn health(&self) -> ClientResult<HealthResponse> {
        let response = self.http.get(self.url("/health")).send().await?;
        decode(response).await
    }
}

/// Decode a success body, or turn the server's `{error}` body into
/// [`ClientError::Api`].
async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(error) => error.error,
        Err(_) if body.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string(),
        Err(_) => body,
    };

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
