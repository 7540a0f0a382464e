//! Payment lifecycle states
//!
//! The status set is closed: nothing outside [`PaymentStatus::ALL`] can be
//! persisted or returned. Any state may move to any other state through the
//! explicit transition operation; no transition graph is enforced.

use crate::core::error::PaymentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle stage of a payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// Created but not yet processed
    Pending,
    /// Being verified or sent
    Processing,
    /// Successfully processed
    Completed,
    /// Processing ended in error
    Failed,
}

impl PaymentStatus {
    /// Every member, in declaration order
    pub const ALL: [PaymentStatus; 4] = [
        PaymentStatus::Pending,
        PaymentStatus::Processing,
        PaymentStatus::Completed,
        PaymentStatus::Failed,
    ];

    /// Parse a status token
    ///
    /// Matching trims surrounding whitespace and ignores case. Blank input
    /// and unknown names fail with [`PaymentError::InvalidStatus`].
    pub fn parse(text: &str) -> Result<Self, PaymentError> {
        let token = text.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| PaymentError::InvalidStatus {
                value: text.to_string(),
            })
    }

    /// Canonical uppercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Processing => "PROCESSING",
            PaymentStatus::Completed => "COMPLETED",
            PaymentStatus::Failed => "FAILED",
        }
    }

    /// Membership check used by validation
    ///
    /// Absent input is "not provided" and therefore passes; presence is
    /// checked by a separate rule.
    pub fn is_member(text: Option<&str>) -> bool {
        match text {
            None => true,
            Some(text) => Self::parse(text).is_ok(),
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
