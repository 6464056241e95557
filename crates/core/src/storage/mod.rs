//! Storage layer for task persistence.

mod memory;
#[cfg(feature = "mongo")]
mod mongo;
mod samples;
mod traits;

pub use memory::MemoryStorage;
#[cfg(feature = "mongo")]
pub use mongo::MongoStorage;
pub use samples::sample_tasks;
pub use traits::{StorageMode, TaskStore};
