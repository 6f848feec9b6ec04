//! karate-admin: report the live divisions of every cached event.
//!
//! Loads configuration, opens the configured event store, refreshes category
//! summaries from the tournament API when one is configured, then prints the
//! active round of each division.

use std::error::Error;
use std::sync::Arc;

use karate_admin::adapters::{FileEventStore, HttpCategorySummarySource, InMemoryEventStore};
use karate_admin::application::{
    DivisionRoundController, EventWriter, SyncCategoriesCommand, SyncCategoriesHandler,
};
use karate_admin::config::{AppConfig, LoggingConfig, StorageBackend, StorageConfig};
use karate_admin::ports::EventStore;

fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn Error + Send + Sync>> {
    let filter = logging.env_filter()?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if logging.json {
        builder.json().try_init()?;
    } else {
        builder.try_init()?;
    }
    Ok(())
}

fn build_store(storage: &StorageConfig) -> Arc<dyn EventStore> {
    match storage.backend {
        StorageBackend::Memory => Arc::new(InMemoryEventStore::new()),
        StorageBackend::File => Arc::new(FileEventStore::new(&storage.data_dir)),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging)?;

    tracing::info!(
        environment = ?config.environment,
        backend = ?config.storage.backend,
        "Starting karate-admin"
    );

    let store = build_store(&config.storage);
    let writer = EventWriter::new(store.clone());
    let controller = DivisionRoundController::new(writer.clone());

    let events = store.list().await?;

    if let Some(api) = config.remote.api_config() {
        let source = Arc::new(HttpCategorySummarySource::new(api)?);
        let sync = SyncCategoriesHandler::new(writer.clone(), source);
        for event in &events {
            if let Err(e) = sync
                .handle(SyncCategoriesCommand {
                    event_id: *event.id(),
                })
                .await
            {
                tracing::warn!(event_id = %event.id(), error = %e, "Category sync failed");
            }
        }
    }

    for event in &events {
        let rounds = controller.active_rounds(event.id()).await?;
        println!("{} ({})", event.name(), event.id());
        if rounds.is_empty() {
            println!("  no division is live");
            continue;
        }
        for (division, round) in rounds.iter() {
            println!("  {:<32} {}", division.as_str(), round);
        }
    }

    Ok(())
}
