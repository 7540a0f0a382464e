//! Server host for transport-agnostic API exposure
//!
//! The host holds everything an exposure needs to serve payment operations.
//! It is built once at process start and shared behind an `Arc`.

use crate::core::events::EventBus;
use crate::core::service::PaymentService;
use std::sync::Arc;

/// Host context containing all service state
///
/// # Example
///
/// ```rust,ignore
/// let host = Arc::new(ServerHost::new(service));
/// let rest_app = RestExposure::build_router(host, vec![])?;
/// ```
pub struct ServerHost {
    /// Lifecycle service shared by every request
    pub service: Arc<PaymentService>,

    /// Event bus receiving status changes, when it is the configured notifier
    pub event_bus: Option<Arc<EventBus>>,
}

impl ServerHost {
    pub fn new(service: PaymentService) -> Self {
        Self {
            service: Arc::new(service),
            event_bus: None,
        }
    }

    /// Set the event bus for status-change subscribers
    pub fn with_event_bus(mut self, event_bus: EventBus) -> Self {
        self.event_bus = Some(Arc::new(event_bus));
        self
    }

    /// Get a reference to the event bus (if configured)
    pub fn event_bus(&self) -> Option<&Arc<EventBus>> {
        self.event_bus.as_ref()
    }
}
