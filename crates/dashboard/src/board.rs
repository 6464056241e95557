//! Client-side copy of the task list.
//!
//! The board only changes after the server confirms a call. A failed call is
//! logged and leaves the list exactly as it was; nothing is retried.

use taskdash_core::api::{CreateTaskRequest, UpdateTaskRequest};
use taskdash_core::Task;
use tracing::{debug, error};

use crate::client::{ClientError, ClientResult, TaskClient};
use crate::modal::{ModalAction, TaskModal};

/// Task list held as view state, reconciled with server responses.
#[derive(Debug)]
pub struct TaskBoard {
    client: TaskClient,
    tasks: Vec<Task>,
}

impl TaskBoard {
    pub fn new(client: TaskClient) -> Self {
        Self {
            client,
            tasks: Vec::new(),
        }
    }

    pub fn client(&self) -> &TaskClient {
        &self.client
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn find(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    /// Replace the whole list with the server's.
    pub async fn refresh(&mut self) -> ClientResult<()> {
        match self.client.list_tasks().await {
            Ok(tasks) => {
                debug!(count = tasks.len(), "Loaded tasks");
                self.tasks = tasks;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Error fetching tasks");
                Err(e)
            }
        }
    }

    /// Send the modal's action; on success the result is merged into the
    /// board and the modal is closed. Returns `None` if there was nothing to
    /// submit.
    pub async fn submit(&mut self, modal: &mut TaskModal) -> ClientResult<Option<Task>> {
        let Some(action) = modal.submit() else {
            return Ok(None);
        };

        let task = match action {
            ModalAction::Create(form) => {
                let request = form.to_create_request()?;
                self.create(&request).await?
            }
            ModalAction::Update { id, form } => {
                let request = form.to_update_request()?;
                self.update(&id, &request).await?
            }
        };

        modal.close();
        Ok(Some(task))
    }

    /// Create on the server, then append locally.
    pub async fn create(&mut self, request: &CreateTaskRequest) -> ClientResult<Task> {
        match self.client.create_task(request).await {
            Ok(task) => {
                self.tasks.push(task.clone());
                Ok(task)
            }
            Err(e) => {
                error!(error = %e, "Error adding task");
                Err(e)
            }
        }
    }

    /// Update on the server, then replace the local copy in place.
    pub async fn update(
        &mut self,
        task_id: &str,
        request: &UpdateTaskRequest,
    ) -> ClientResult<Task> {
        match self.client.update_task(task_id, request).await {
            Ok(task) => {
                self.replace(task_id, task.clone());
                Ok(task)
            }
            Err(e) => {
                error!(task_id, error = %e, "Error updating task");
                Err(e)
            }
        }
    }

    /// Flip a task between pending and completed.
    pub async fn toggle_status(&mut self, task_id: &str) -> ClientResult<Task> {
        let status = self
            .find(task_id)
            .map(|task| task.status.toggled())
            .ok_or_else(|| ClientError::Validation(format!("Task '{task_id}' is not loaded")))?;
        let request = UpdateTaskRequest::status(status);

        match self.client.update_task(task_id, &request).await {
            Ok(task) => {
                self.replace(task_id, task.clone());
                Ok(task)
            }
            Err(e) => {
                error!(task_id, error = %e, "Error updating task status");
                Err(e)
            }
        }
    }

    /// Delete on the server, then drop the local copy.
    pub async fn delete(&mut self, task_id: &str) -> ClientResult<()> {
        match self.client.delete_task(task_id).await {
            Ok(()) => {
                self.tasks.retain(|task| task.id != task_id);
                Ok(())
            }
            Err(e) => {
                error!(task_id, error = %e, "Error deleting task");
                Err(e)
            }
        }
    }

    fn replace(&mut self, task_id: &str, updated: Task) {
        if let Some(slot) = self.tasks.iter_mut().find(|task| task.id == task_id) {
            *slot = updated;
        }
    }
}
