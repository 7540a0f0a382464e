//! HTTP webhook notifier
//!
//! Posts every status change as a JSON [`EventEnvelope`] to one endpoint.
//! The exchange and routing key travel as headers so a broker bridge on the
//! receiving side can route the event.

use crate::core::error::NotificationError;
use crate::core::events::{Addressing, EventEnvelope, PaymentEvent};
use crate::core::notifier::PaymentNotifier;
use crate::core::payment::Payment;
use async_trait::async_trait;
use std::time::Duration;

/// Notifier delivering events to an HTTP endpoint
#[derive(Clone, Debug)]
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
    addressing: Addressing,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>, addressing: Addressing, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self {
            client,
            url: url.into(),
            addressing,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn unavailable(&self, message: impl ToString) -> NotificationError {
        NotificationError::ChannelUnavailable {
            channel: self.url.clone(),
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl PaymentNotifier for WebhookNotifier {
    async fn publish(&self, payment: &Payment) -> Result<(), NotificationError> {
        let envelope = EventEnvelope::new(PaymentEvent::status_changed(payment), &self.addressing);
        let body = serde_json::to_vec(&envelope)?;

        tracing::info!(
            url = %self.url,
            routing_key = %self.addressing.routing_key,
            id = ?payment.id,
            "publishing payment event"
        );

        let response = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .header("X-Exchange", &self.addressing.exchange)
            .header("X-Routing-Key", &self.addressing.routing_key)
            .body(body)
            .send()
            .await
            .map_err(|e| self.unavailable(e))?;

        response
            .error_for_status()
            .map_err(|e| self.unavailable(e))?;

        Ok(())
    }
}
