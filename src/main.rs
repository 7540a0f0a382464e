use anyhow::Result;
use payments::config::{AppConfig, StorageBackend};
use payments::core::PaymentStore;
use payments::notifications;
use payments::server::ServerBuilder;
use payments::storage::InMemoryPaymentStore;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cfg = AppConfig::load()?;
    tracing::info!(
        backend = ?cfg.storage.backend,
        notifier = ?cfg.notifications.kind,
        "starting payment-lifecycle"
    );

    let store = build_store(&cfg).await?;
    let setup = notifications::from_config(&cfg.notifications)?;

    let mut builder = ServerBuilder::new()
        .with_shared_store(store)
        .with_shared_notifier(setup.notifier);
    if let Some(bus) = setup.event_bus {
        builder = builder.with_existing_event_bus(bus);
    }

    builder.serve(&cfg.server.bind_addr).await
}

async fn build_store(cfg: &AppConfig) -> Result<Arc<dyn PaymentStore>> {
    match cfg.storage.backend {
        StorageBackend::InMemory => Ok(Arc::new(InMemoryPaymentStore::new())),
        #[cfg(feature = "mongodb_backend")]
        StorageBackend::Mongodb => {
            let store = payments::storage::MongoPaymentStore::connect(
                &cfg.storage.uri,
                &cfg.storage.database,
                &cfg.storage.collection,
            )
            .await?;
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "mongodb_backend"))]
        StorageBackend::Mongodb => {
            anyhow::bail!("storage backend 'mongodb' requires the `mongodb_backend` feature")
        }
    }
}
