//! Configuration for the TaskDash server.

use std::env;
use std::time::Duration;

/// Default connection string when `MONGO_URI` is unset
pub const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017";

/// Server configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port.
    pub port: u16,
    /// Document store connection string.
    pub mongo_uri: String,
    /// Database holding the task collection.
    pub database: String,
    /// Collection holding task documents.
    pub collection: String,
    /// How long the startup probe waits for the document store.
    pub connect_timeout: Duration,
    /// Whether to pre-populate an empty store with sample tasks.
    pub seed_sample_tasks: bool,
}

impl Config {
    /// Build the configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5000),
            mongo_uri: env::var("MONGO_URI")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_MONGO_URI.to_string()),
            database: env::var("MONGO_DB").unwrap_or_else(|_| "taskDashboard".to_string()),
            collection: env::var("MONGO_COLLECTION").unwrap_or_else(|_| "tasks".to_string()),
            connect_timeout: Duration::from_secs(
                env::var("MONGO_CONNECT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
            seed_sample_tasks: env::var("SEED_SAMPLE_TASKS")
                .map(|v| !matches!(v.to_lowercase().as_str(), "false" | "0" | "no"))
                .unwrap_or(true),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
