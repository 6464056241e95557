//! Request validation: turns wire bodies into store inputs.

use chrono::{DateTime, Utc};
use taskdash_core::api::{CreateTaskRequest, UpdateTaskRequest};
use taskdash_core::{parse_due_date, TaskDraft, TaskPatch};

use crate::error::ApiError;

/// Validate a create body. The title must be present and non-blank.
pub fn draft_from_request(req: CreateTaskRequest) -> Result<TaskDraft, ApiError> {
    let title = req
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Validation("Title is required".to_string()))?;

    Ok(TaskDraft {
        title: title.to_string(),
        description: req.description.unwrap_or_default().trim().to_string(),
        status: req.status.unwrap_or_default(),
        due_date: optional_due_date(req.due_date.as_deref())?,
    })
}

/// Validate an update body, forwarding only the fields that were sent.
pub fn patch_from_request(req: UpdateTaskRequest) -> Result<TaskPatch, ApiError> {
    let title = match req.title {
        Some(title) if title.trim().is_empty() => {
            return Err(ApiError::Validation("Title cannot be empty".to_string()));
        }
        Some(title) => Some(title.trim().to_string()),
        None => None,
    };

    let due_date = match req.due_date {
        Some(value) => Some(optional_due_date(value.as_deref())?),
        None => None,
    };

    Ok(TaskPatch {
        title,
        description: req.description.map(|d| d.trim().to_string()),
        status: req.status,
        due_date,
    })
}

/// `null` and blank strings mean "no due date"
fn optional_due_date(value: Option<&str>) -> Result<Option<DateTime<Utc>>, ApiError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_due_date(s)
            .map(Some)
            .map_err(|e| ApiError::Validation(e.to_string())),
    }
}
