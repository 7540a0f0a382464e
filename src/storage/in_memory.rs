//! In-memory implementation of PaymentStore for testing and development

use crate::core::PaymentStore;
use crate::core::payment::{Payment, PaymentId};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory payment store
///
/// Uses RwLock for thread-safe access. Records are listed in the order they
/// were first saved; identifiers are random UUIDs.
#[derive(Clone)]
pub struct InMemoryPaymentStore {
    payments: Arc<RwLock<IndexMap<PaymentId, Payment>>>,
}

impl InMemoryPaymentStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            payments: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.payments.read().map(|p| p.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryPaymentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn save(&self, mut payment: Payment) -> Result<Payment> {
        let mut payments = self
            .payments
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let id = payment
            .id
            .get_or_insert_with(|| PaymentId::new(Uuid::new_v4().to_string()))
            .clone();
        payments.insert(id, payment.clone());

        Ok(payment)
    }

    async fn find_by_id(&self, id: &PaymentId) -> Result<Option<Payment>> {
        let payments = self
            .payments
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(payments.get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Payment>> {
        let payments = self
            .payments
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(payments.values().cloned().collect())
    }
}
