//! Client for the task backend.
//!
//! The backend exposes four endpoints:
//! - `GET /tasks` lists every task
//! - `POST /task` creates a task
//! - `POST /updateTask` updates a task
//! - `DELETE /task?id=<id>` deletes a task
//!
//! [`TaskApi`] abstracts them so the action flows can be exercised against a mock, and
//! [`HttpTaskApi`] talks to the real service over HTTP.

use crate::config::ClientConfig;
use crate::task::{CreateTaskRequest, Task, TaskId, UpdateTaskRequest};
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Could not reach the task service: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{method} {path} failed with status {status}")]
    Status {
        method: &'static str,
        path: &'static str,
        status: StatusCode,
    },
}

/// Operations offered by the task backend.
///
/// Futures are not `Send`: in the browser they run on the single JS event loop.
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait TaskApi {
    /// Fetches every task, in backend order.
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError>;

    /// Creates a task and returns it with its backend-assigned id.
    async fn create_task(&self, request: &CreateTaskRequest) -> Result<Task, ApiError>;

    /// Updates an existing task and returns its new representation.
    async fn update_task(&self, request: &UpdateTaskRequest) -> Result<Task, ApiError>;

    /// Deletes a task. Resolves only once the backend confirmed the removal.
    async fn delete_task(&self, id: &TaskId) -> Result<(), ApiError>;
}

/// [`TaskApi`] over HTTP with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTaskApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.api_base_url().to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn ensure_success(
    response: Response,
    method: &'static str,
    path: &'static str,
) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            method,
            path,
            status,
        })
    }
}

async fn read_json<T: DeserializeOwned>(
    response: Response,
    method: &'static str,
    path: &'static str,
) -> Result<T, ApiError> {
    let response = ensure_success(response, method, path)?;
    Ok(response.json::<T>().await?)
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    #[tracing::instrument(skip(self))]
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let response = self.client.get(self.url("/tasks")).send().await?;
        let tasks: Vec<Task> = read_json(response, "GET", "/tasks").await?;
        debug!("Fetched {} tasks", tasks.len());
        Ok(tasks)
    }

    #[tracing::instrument(skip(self))]
    async fn create_task(&self, request: &CreateTaskRequest) -> Result<Task, ApiError> {
        let response = self
            .client
            .post(self.url("/task"))
            .json(request)
            .send()
            .await?;
        read_json(response, "POST", "/task").await
    }

    #[tracing::instrument(skip(self))]
    async fn update_task(&self, request: &UpdateTaskRequest) -> Result<Task, ApiError> {
        let response = self
            .client
            .post(self.url("/updateTask"))
            .json(request)
            .send()
            .await?;
        read_json(response, "POST", "/updateTask").await
    }

    #[tracing::instrument(skip(self))]
    async fn delete_task(&self, id: &TaskId) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url("/task"))
            .query(&[("id", id.as_str())])
            .send()
            .await?;
        ensure_success(response, "DELETE", "/task")?;
        Ok(())
    }
}
