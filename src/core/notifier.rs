//! Notification contract required by the lifecycle service
//!
//! Publication is best-effort: the service dispatches it without waiting
//! and only logs a failure.

use crate::core::error::NotificationError;
use crate::core::payment::Payment;
use async_trait::async_trait;

/// Emitter of payment status changes
#[async_trait]
pub trait PaymentNotifier: Send + Sync {
    /// Publish a record whose status just changed
    async fn publish(&self, payment: &Payment) -> Result<(), NotificationError>;
}

/// Notifier that discards every event
///
/// Used when notifications are disabled in configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

#[async_trait]
impl PaymentNotifier for NoopNotifier {
    async fn publish(&self, payment: &Payment) -> Result<(), NotificationError> {
        tracing::debug!(id = ?payment.id, "notifications disabled, dropping event");
        Ok(())
    }
}
