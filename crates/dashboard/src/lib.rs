#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

//! # TaskDash dashboard
//!
//! Terminal client for the TaskDash API.
//!
//! - [`client`]: HTTP calls against the task routes
//! - [`board`]: the client-side task list, reconciled with server responses
//! - [`view`] and [`modal`]: search, filter, grid/list, theme and the task form
//! - [`ui`] and [`shell`]: rendering and the interactive loop

pub mod board;
pub mod client;
pub mod modal;
pub mod shell;
pub mod ui;
pub mod view;

pub use board::TaskBoard;
pub use client::{ClientError, ClientResult, TaskClient, DEFAULT_API_URL};
pub use modal::{ModalAction, TaskForm, TaskModal};
pub use view::{DashboardView, StatusFilter, TaskStats, Theme, ViewMode};
