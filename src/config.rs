use url::Url;

use crate::core::services::ApiError;

/// Used when no `KANBAN_API_URL` is set at build time.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/";

pub const TASKS_PATH: &str = "tarefa/";
pub const USERS_PATH: &str = "usuario/";

/// Location of the remote task API, provided to the component tree via context.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: Url,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        // Url::join drops the last segment unless the base ends with '/'
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        Ok(Self {
            base_url: Url::parse(&normalized)?,
        })
    }

    /// Build-time override first, then the local development server.
    pub fn from_build_env() -> Self {
        option_env!("KANBAN_API_URL")
            .and_then(|url| Self::new(url).ok())
            .unwrap_or_default()
    }

    pub fn tasks_url(&self) -> Result<Url, ApiError> {
        Ok(self.base_url.join(TASKS_PATH)?)
    }

    pub fn task_url(&self, id: u64) -> Result<Url, ApiError> {
        Ok(self.base_url.join(&format!("{}{}/", TASKS_PATH, id))?)
    }

    pub fn users_url(&self) -> Result<Url, ApiError> {
        Ok(self.base_url.join(USERS_PATH)?)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
        }
    }
}
