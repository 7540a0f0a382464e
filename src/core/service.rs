//! Payment lifecycle service
//!
//! Orchestrates creation, lookup, listing and status transitions. State is
//! read from the store on every call; nothing is cached between requests.
//!
//! Concurrent transitions on the same payment are not coordinated. Each one
//! reads, modifies and saves, so the store's last write wins.

use crate::core::error::{PaymentError, PaymentResult};
use crate::core::mapper::{self, PaymentRequest};
use crate::core::notifier::PaymentNotifier;
use crate::core::payment::{Payment, PaymentId};
use crate::core::status::PaymentStatus;
use crate::core::store::PaymentStore;
use crate::core::validation;
use std::sync::Arc;

/// Service managing payment records and their status
#[derive(Clone)]
pub struct PaymentService {
    store: Arc<dyn PaymentStore>,
    notifier: Arc<dyn PaymentNotifier>,
}

impl PaymentService {
    pub fn new(store: Arc<dyn PaymentStore>, notifier: Arc<dyn PaymentNotifier>) -> Self {
        Self { store, notifier }
    }

    /// Validate and persist a new payment
    ///
    /// Every violated field is reported. No notification is sent on creation.
    pub async fn create(&self, request: PaymentRequest) -> PaymentResult<Payment> {
        let draft = validation::validate_create(&request)?;
        let payment = mapper::to_entity(draft);

        let saved = self.store.save(payment).await?;
        tracing::info!(id = ?saved.id, status = %saved.status, "payment created");
        Ok(saved)
    }

    /// Every stored payment
    pub async fn get_all(&self) -> PaymentResult<Vec<Payment>> {
        Ok(self.store.list_all().await?)
    }

    /// Look up a payment, failing with `NotFound` when absent
    pub async fn get_by_id(&self, id: &str) -> PaymentResult<Payment> {
        self.store
            .find_by_id(&PaymentId::from(id))
            .await?
            .ok_or_else(|| PaymentError::NotFound { id: id.to_string() })
    }

    /// Move a payment to a new status
    ///
    /// The status token is parsed before anything is written. Any status is
    /// reachable from any other. After the save, the updated record is handed
    /// to the notifier on a detached task; its outcome never reaches the
    /// caller. Outside a tokio runtime the event is dropped with a warning.
    pub async fn update_status(&self, id: &str, new_status: &str) -> PaymentResult<Payment> {
        let current = self.get_by_id(id).await?;
        let status = PaymentStatus::parse(new_status)?;

        let updated = self.store.save(current.with_status(status)).await?;
        tracing::info!(
            %id,
            from = %current.status,
            to = %updated.status,
            "payment status updated"
        );

        self.dispatch_notification(updated.clone());
        Ok(updated)
    }

    fn dispatch_notification(&self, payment: Payment) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(id = ?payment.id, "no tokio runtime, payment event not published");
            return;
        };

        let notifier = Arc::clone(&self.notifier);
        runtime.spawn(async move {
            if let Err(err) = notifier.publish(&payment).await {
                tracing::warn!(id = ?payment.id, error = %err, "failed to publish payment event");
            }
        });
    }
}
