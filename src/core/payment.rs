//! Payment record model

use crate::core::status::PaymentStatus;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, store-assigned payment identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(String);

impl PaymentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PaymentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PaymentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A persisted payment and its current status
///
/// `id` is `None` until the first save. After creation only `status`
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PaymentId>,
    pub concept: String,
    pub quantity: i32,
    pub payer: String,
    pub recipient: String,
    pub amount: Decimal,
    pub status: PaymentStatus,
}

impl Payment {
    /// Copy of this record with a different status and nothing else changed
    pub fn with_status(&self, status: PaymentStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

/// Validated creation input, fully typed and not yet persisted
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentDraft {
    pub concept: String,
    pub quantity: i32,
    pub payer: String,
    pub recipient: String,
    pub amount: Decimal,
    pub status: PaymentStatus,
}
