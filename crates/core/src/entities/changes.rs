//! Create and partial-update inputs for tasks.

use chrono::{DateTime, SubsecRound, Utc};

use super::task::{Task, TaskStatus};
use crate::errors::{TasksError, TasksResult};

/// Input for creating a task. The store assigns `id` and `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub due_date: Option<DateTime<Utc>>,
}

impl TaskDraft {
    /// Draft with only a title; everything else takes its default
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            status: TaskStatus::default(),
            due_date: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Turn the draft into a stored task.
    ///
    /// Fails if the title is blank after trimming. Timestamps are kept at
    /// millisecond precision, which is what the document store persists.
    pub fn into_task(self, id: impl Into<String>, now: DateTime<Utc>) -> TasksResult<Task> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TasksError::validation("Title is required"));
        }

        Ok(Task {
            id: id.into(),
            title: title.to_string(),
            description: self.description.trim().to_string(),
            status: self.status,
            created_at: now.trunc_subsecs(3),
            due_date: self.due_date.map(|due| due.trunc_subsecs(3)),
        })
    }
}

/// Partial update: only fields that are `Some` are written.
///
/// `due_date` is doubly optional so that "clear the due date"
/// (`Some(None)`) is distinct from "leave it alone" (`None`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub due_date: Option<Option<DateTime<Utc>>>,
}

impl TaskPatch {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_due_date(mut self, due_date: Option<DateTime<Utc>>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.due_date.is_none()
    }

    /// A patch may not blank out the title
    pub fn validate(&self) -> TasksResult<()> {
        match &self.title {
            Some(title) if title.trim().is_empty() => {
                Err(TasksError::validation("Title cannot be empty"))
            }
            _ => Ok(()),
        }
    }

    /// Merge the supplied fields into `task`, leaving the rest untouched
    pub fn apply(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.trim().to_string();
        }
        if let Some(description) = &self.description {
            task.description = description.trim().to_string();
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date.map(|due| due.trunc_subsecs(3));
        }
    }
}
