use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use super::error::{ApiError, Result};
use crate::config::ApiConfig;
use crate::core::models::{NewTask, NewUser, Task, TaskId, TaskPatch, TaskStatus, User};

/// REST client for the task API.
///
/// Cloning is cheap; one instance is shared through context.
#[derive(Debug, Clone)]
pub struct TaskApi {
    http_client: Client,
    config: ApiConfig,
}

impl TaskApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http_client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// GET /tarefa/
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        let url = self.config.tasks_url()?;
        self.send_json(self.request(Method::GET, url)).await
    }

    /// GET /tarefa/{id}/
    pub async fn get_task(&self, id: TaskId) -> Result<Task> {
        let url = self.config.task_url(id)?;
        self.send_json(self.request(Method::GET, url)).await
    }

    /// PATCH /tarefa/{id}/ with only the fields present in `patch`.
    /// The updated task in the response is not used.
    pub async fn update_task(&self, id: TaskId, patch: &TaskPatch) -> Result<()> {
        let url = self.config.task_url(id)?;
        self.send(self.request(Method::PATCH, url).json(patch)).await
    }

    pub async fn update_status(&self, id: TaskId, status: TaskStatus) -> Result<()> {
        self.update_task(id, &TaskPatch::status(status)).await
    }

    /// DELETE /tarefa/{id}/
    pub async fn delete_task(&self, id: TaskId) -> Result<()> {
        let url = self.config.task_url(id)?;
        self.send(self.request(Method::DELETE, url)).await
    }

    /// POST /tarefa/
    pub async fn create_task(&self, task: &NewTask) -> Result<()> {
        let url = self.config.tasks_url()?;
        self.send(self.request(Method::POST, url).json(task)).await
    }

    /// GET /usuario/
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let url = self.config.users_url()?;
        self.send_json(self.request(Method::GET, url)).await
    }

    /// POST /usuario/
    pub async fn create_user(&self, user: &NewUser) -> Result<()> {
        let url = self.config.users_url()?;
        self.send(self.request(Method::POST, url).json(user)).await
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http_client.request(method, url)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<()> {
        let response = builder.send().await?;
        Self::check_status(response).await.map(|_| ())
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(ApiError::status(status, message))
    }
}
