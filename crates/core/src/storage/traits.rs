//! Storage trait definitions.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::entities::{Task, TaskDraft, TaskPatch};
use crate::errors::TasksResult;

/// Which backing the running store uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageMode {
    #[serde(rename = "mongodb")]
    Mongo,
    #[serde(rename = "in-memory")]
    InMemory,
}

impl std::fmt::Display for StorageMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mongo => write!(f, "mongodb"),
            Self::InMemory => write!(f, "in-memory"),
        }
    }
}

/// Storage interface for task persistence.
///
/// Every backing must behave identically for each operation; the server
/// picks one at startup and never switches.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Get storage type identifier
    fn storage_mode(&self) -> StorageMode;

    /// Load all tasks
    async fn list_tasks(&self) -> TasksResult<Vec<Task>>;

    /// Load a single task by ID; `None` if it does not exist
    async fn get_task(&self, task_id: &str) -> TasksResult<Option<Task>>;

    /// Assign an id and creation time, persist, and return the stored task
    async fn create_task(&self, draft: TaskDraft) -> TasksResult<Task>;

    /// Merge `patch` into an existing task; `None` if it does not exist
    async fn update_task(&self, task_id: &str, patch: &TaskPatch) -> TasksResult<Option<Task>>;

    /// Delete a task; `false` if it did not exist
    async fn delete_task(&self, task_id: &str) -> TasksResult<bool>;
}
