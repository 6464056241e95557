//! REST API for TaskDash.
//!
//! This crate provides:
//! - Environment-driven configuration
//! - Startup selection between the document store and in-memory fallback
//! - Request validation and error-to-status mapping
//! - The axum router serving `/tasks` and `/health`

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;
pub mod startup;
pub mod validation;

pub use config::Config;
pub use error::ApiError;
pub use server::{build_router, run_server, AppState};
pub use startup::select_store;
