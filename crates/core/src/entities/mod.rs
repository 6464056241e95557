//! Core data structures for task management.

mod changes;
mod task;

pub use changes::{TaskDraft, TaskPatch};
pub use task::{parse_due_date, Task, TaskStatus};
