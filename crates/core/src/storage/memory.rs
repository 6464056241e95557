//! Process-local storage used when the document store is unreachable.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::traits::{StorageMode, TaskStore};
use crate::entities::{Task, TaskDraft, TaskPatch};
use crate::errors::TasksResult;

/// In-memory task list.
///
/// Each operation takes the lock on its own; nothing spans operations, so
/// concurrent read-modify-write cycles from different requests may interleave.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    tasks: RwLock<Vec<Task>>,
}

impl MemoryStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `tasks`, kept in the given order
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: RwLock::new(tasks),
        }
    }
}

#[async_trait]
impl TaskStore for MemoryStorage {
    fn storage_mode(&self) -> StorageMode {
        StorageMode::InMemory
    }

    async fn list_tasks(&self) -> TasksResult<Vec<Task>> {
        Ok(self.tasks.read().await.clone())
    }

    async fn get_task(&self, task_id: &str) -> TasksResult<Option<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.iter().find(|t| t.id == task_id).cloned())
    }

    async fn create_task(&self, draft: TaskDraft) -> TasksResult<Task> {
        let task = draft.into_task(Uuid::new_v4().to_string(), Utc::now())?;
        self.tasks.write().await.push(task.clone());
        debug!(task_id = %task.id, "Stored task in memory");
        Ok(task)
    }

    async fn update_task(&self, task_id: &str, patch: &TaskPatch) -> TasksResult<Option<Task>> {
        patch.validate()?;

        let mut tasks = self.tasks.write().await;
        let Some(task) = tasks.iter_mut().find(|t| t.id == task_id) else {
            return Ok(None);
        };

        patch.apply(task);
        Ok(Some(task.clone()))
    }

    async fn delete_task(&self, task_id: &str) -> TasksResult<bool> {
        let mut tasks = self.tasks.write().await;
        let Some(idx) = tasks.iter().position(|t| t.id == task_id) else {
            return Ok(false);
        };

        tasks.remove(idx);
        Ok(true)
    }
}
