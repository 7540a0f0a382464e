//! Persistence contract required by the lifecycle service

use crate::core::payment::{Payment, PaymentId};
use anyhow::Result;
use async_trait::async_trait;

/// Store trait for payment records
///
/// The lifecycle service is agnostic to the underlying storage mechanism.
/// Implementations must:
/// - assign an `id` on the first save of a record that has none
/// - overwrite the prior version when saving a record whose `id` exists
/// - treat a missing record as `Ok(None)`, not as an error
#[async_trait]
pub trait PaymentStore: Send + Sync {
    /// Persist a new or updated record and return the stored version
    async fn save(&self, payment: Payment) -> Result<Payment>;

    /// Point lookup by identifier
    async fn find_by_id(&self, id: &PaymentId) -> Result<Option<Payment>>;

    /// Every stored record, in no particular order
    async fn list_all(&self) -> Result<Vec<Payment>>;
}
