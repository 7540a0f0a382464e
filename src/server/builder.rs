//! ServerBuilder for fluent API to build HTTP servers

use super::exposure::RestExposure;
use super::host::ServerHost;
use crate::core::events::EventBus;
use crate::core::notifier::{NoopNotifier, PaymentNotifier};
use crate::core::service::PaymentService;
use crate::core::store::PaymentStore;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder wiring the store, the notifier and the REST routes
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_store(InMemoryPaymentStore::new())
///     .with_event_bus(1024)
///     .build()?;
/// ```
pub struct ServerBuilder {
    store: Option<Arc<dyn PaymentStore>>,
    notifier: Option<Arc<dyn PaymentNotifier>>,
    event_bus: Option<EventBus>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            store: None,
            notifier: None,
            event_bus: None,
            custom_routes: Vec::new(),
        }
    }

    /// Set the payment store (required)
    pub fn with_store(self, store: impl PaymentStore + 'static) -> Self {
        self.with_shared_store(Arc::new(store))
    }

    pub fn with_shared_store(mut self, store: Arc<dyn PaymentStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the notifier receiving status changes
    ///
    /// Takes precedence over the event bus as notifier.
    pub fn with_notifier(self, notifier: impl PaymentNotifier + 'static) -> Self {
        self.with_shared_notifier(Arc::new(notifier))
    }

    pub fn with_shared_notifier(mut self, notifier: Arc<dyn PaymentNotifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Enable an in-process event bus for status changes
    ///
    /// Without an explicit notifier the bus becomes the notifier.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Buffer size for the broadcast channel (recommended: 1024)
    pub fn with_event_bus(self, capacity: usize) -> Self {
        self.with_existing_event_bus(EventBus::new(capacity))
    }

    pub fn with_existing_event_bus(mut self, event_bus: EventBus) -> Self {
        self.event_bus = Some(event_bus);
        self
    }

    /// Add custom routes to the server
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the transport-agnostic host
    pub fn build_host(&mut self) -> Result<ServerHost> {
        let store = self
            .store
            .take()
            .ok_or_else(|| anyhow::anyhow!("PaymentStore is required. Call .with_store()"))?;

        let event_bus = self.event_bus.take();
        let notifier: Arc<dyn PaymentNotifier> = match (self.notifier.take(), &event_bus) {
            (Some(notifier), _) => notifier,
            (None, Some(bus)) => Arc::new(bus.clone()),
            (None, None) => {
                tracing::warn!("no notifier configured, status changes will not be published");
                Arc::new(NoopNotifier)
            }
        };

        let mut host = ServerHost::new(PaymentService::new(store, notifier));
        if let Some(bus) = event_bus {
            host = host.with_event_bus(bus);
        }

        Ok(host)
    }

    /// Build the final REST router
    pub fn build(mut self) -> Result<Router> {
        let host = Arc::new(self.build_host()?);
        let custom_routes = std::mem::take(&mut self.custom_routes);
        RestExposure::build_router(host, custom_routes)
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
