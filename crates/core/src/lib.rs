#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

//! # TaskDash core
//!
//! Shared building blocks for the TaskDash server and dashboard client.
//!
//! This crate provides:
//! - The `Task` entity with its draft (create) and patch (partial update) forms
//! - JSON wire types exchanged over the HTTP API
//! - The `TaskStore` trait with an in-memory and a MongoDB implementation
//!
//! ## Example
//!
//! ```rust,ignore
//! use taskdash_core::{MemoryStorage, TaskDraft, TaskStore};
//!
//! let store = MemoryStorage::new();
//! let task = store.create_task(TaskDraft::new("Buy milk")).await?;
//! assert_eq!(task.status.to_string(), "pending");
//! ```

// Core entities
pub mod entities;

// Error types
pub mod errors;

// HTTP wire types
pub mod api;

// Storage layer
pub mod storage;

pub use entities::{parse_due_date, Task, TaskDraft, TaskPatch, TaskStatus};
pub use errors::{TasksError, TasksResult};
pub use storage::{sample_tasks, MemoryStorage, StorageMode, TaskStore};

#[cfg(feature = "mongo")]
pub use storage::MongoStorage;
