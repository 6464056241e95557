//! Startup store selection.

use std::sync::Arc;

use chrono::Utc;
use taskdash_core::{sample_tasks, MemoryStorage, MongoStorage, TaskStore};
use tracing::{info, warn};

use crate::config::Config;

/// Pick the store for the lifetime of the process.
///
/// Tries the document store once; if it cannot be reached the server falls
/// back to process-local storage. There is no later reconnection.
pub async fn select_store(config: &Config) -> Arc<dyn TaskStore> {
    let samples = if config.seed_sample_tasks {
        sample_tasks(Utc::now())
    } else {
        Vec::new()
    };

    match MongoStorage::connect(
        &config.mongo_uri,
        &config.database,
        &config.collection,
        config.connect_timeout,
    )
    .await
    {
        Ok(mongo) => {
            match mongo.seed_if_empty(&samples).await {
                Ok(0) => {}
                Ok(count) => info!(count, "Seeded empty collection with sample tasks"),
                Err(e) => warn!(error = %e, "Could not seed sample tasks"),
            }
            Arc::new(mongo)
        }
        Err(e) => {
            warn!(error = %e, "MongoDB not available, using in-memory storage");
            info!("To use MongoDB, set MONGO_URI in the environment or a .env file");
            Arc::new(MemoryStorage::with_tasks(samples))
        }
    }
}
