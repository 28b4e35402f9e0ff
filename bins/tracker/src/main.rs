//! Fintrack command-line tracker.
//!
//! Wires configuration, tracing, the key-value store and the core services,
//! then runs a single command. See `fintrack --help` for usage.

mod app;
mod cli;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use fintrack_core::store::KeyValueStore;
use fintrack_shared::AppConfig;
use fintrack_store::{InMemoryStore, JsonFileStore};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::Tracker;
use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so `export` output stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fintrack=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load()?;

    let store: Arc<dyn KeyValueStore + Send + Sync> = if config.storage.in_memory {
        info!("Using in-memory store");
        Arc::new(InMemoryStore::new())
    } else {
        info!(path = %config.storage.path.display(), "Using JSON file store");
        Arc::new(JsonFileStore::open(&config.storage.path)?)
    };

    let mut tracker = Tracker::new(
        store,
        config.locale_tag(),
        Duration::from_millis(config.purchase.delay_ms),
    );
    tracker.run(cli.command, &mut std::io::stdout()).await
}
