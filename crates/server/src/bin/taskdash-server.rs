//! TaskDash server binary.
//!
//! Reads its port and store connection string from the environment; no
//! subcommands.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use taskdash_server::{run_server, select_store, Config};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive("taskdash_server=info".parse()?)
                .add_directive("taskdash_core=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    info!("Starting TaskDash server...");

    let config = Config::from_env();
    let store = select_store(&config).await;

    info!(storage = %store.storage_mode(), "Storage mode selected");

    run_server(config.port, store).await
}
