//! Create/edit form.

use taskdash_core::api::{CreateTaskRequest, UpdateTaskRequest};
use taskdash_core::{parse_due_date, Task, TaskStatus};

use crate::client::{ClientError, ClientResult};

/// Form fields as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    /// `YYYY-MM-DD` or empty
    pub due_date: String,
}

impl TaskForm {
    /// Pre-fill from an existing task
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
            due_date: task
                .due_date
                .map(|due| due.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }

    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Normalized due date, `None` when the field is blank
    fn due_date(&self) -> ClientResult<Option<String>> {
        let raw = self.due_date.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        parse_due_date(raw)
            .map(|due| Some(due.to_rfc3339()))
            .map_err(|e| ClientError::Validation(e.to_string()))
    }

    pub fn to_create_request(&self) -> ClientResult<CreateTaskRequest> {
        Ok(CreateTaskRequest {
            title: Some(self.title.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            status: Some(self.status),
            due_date: self.due_date()?,
        })
    }

    /// Every field is sent; a blank due date clears it.
    pub fn to_update_request(&self) -> ClientResult<UpdateTaskRequest> {
        Ok(UpdateTaskRequest {
            title: Some(self.title.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            status: Some(self.status),
            due_date: Some(self.due_date()?),
        })
    }
}

/// What a submitted form should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    Create(TaskForm),
    Update { id: String, form: TaskForm },
}

/// Open/closed state of the form plus the task being edited, if any.
#[derive(Debug, Clone, Default)]
pub struct TaskModal {
    open: bool,
    editing: Option<String>,
    pub form: TaskForm,
}

impl TaskModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Id of the task being edited; `None` in create mode
    pub fn editing_id(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn open_create(&mut self) {
        self.reset();
        self.open = true;
    }

    pub fn open_edit(&mut self, task: &Task) {
        self.form = TaskForm::from_task(task);
        self.editing = Some(task.id.clone());
        self.open = true;
    }

    /// Close and clear the form
    pub fn close(&mut self) {
        self.reset();
        self.open = false;
    }

    fn reset(&mut self) {
        self.form = TaskForm::default();
        self.editing = None;
    }

    /// The action the form would perform, or `None` when it is closed or the
    /// title is blank. The modal stays open until the caller closes it.
    pub fn submit(&self) -> Option<ModalAction> {
        if !self.open || !self.form.has_title() {
            return None;
        }

        Some(match &self.editing {
            Some(id) => ModalAction::Update {
                id: id.clone(),
                form: self.form.clone(),
            },
            None => ModalAction::Create(self.form.clone()),
        })
    }
}
