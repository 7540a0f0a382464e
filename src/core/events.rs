//! Payment change events and the in-process event bus
//!
//! The EventBus uses `tokio::sync::broadcast` to decouple status transitions
//! from whoever consumes them (webhook relays, audit taps, tests).
//!
//! # Architecture
//!
//! ```text
//! PaymentService::update_status ──▶ PaymentNotifier::publish ──▶ EventBus ──▶ subscribers
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! let event_bus = EventBus::new(1024);
//! let mut rx = event_bus.subscribe();
//!
//! let service = PaymentService::new(store, Arc::new(event_bus.clone()));
//! service.update_status(&id, "COMPLETED").await?;
//!
//! if let Ok(envelope) = rx.recv().await {
//!     println!("Received: {:?}", envelope.event);
//! }
//! ```

use crate::core::error::NotificationError;
use crate::core::mapper::{self, PaymentResponse};
use crate::core::notifier::PaymentNotifier;
use crate::core::payment::{Payment, PaymentId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

/// Default exchange name for payment events
pub const DEFAULT_EXCHANGE: &str = "payments.exchange";

/// Default routing key for payment events
pub const DEFAULT_ROUTING_KEY: &str = "payments.status";

/// Events emitted on payment mutations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PaymentEvent {
    /// A payment moved to a new status
    StatusChanged {
        payment_id: Option<PaymentId>,
        status: String,
        payment: PaymentResponse,
    },
}

impl PaymentEvent {
    pub fn status_changed(payment: &Payment) -> Self {
        PaymentEvent::StatusChanged {
            payment_id: payment.id.clone(),
            status: payment.status.as_str().to_string(),
            payment: mapper::to_response(payment),
        }
    }

    /// Get the action name
    pub fn action(&self) -> &str {
        match self {
            PaymentEvent::StatusChanged { .. } => "status_changed",
        }
    }

    /// Get the payment ID this event relates to
    pub fn payment_id(&self) -> Option<&PaymentId> {
        match self {
            PaymentEvent::StatusChanged { payment_id, .. } => payment_id.as_ref(),
        }
    }
}

/// Where an event is addressed on the downstream broker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Addressing {
    pub exchange: String,
    pub routing_key: String,
}

impl Default for Addressing {
    fn default() -> Self {
        Self {
            exchange: DEFAULT_EXCHANGE.to_string(),
            routing_key: DEFAULT_ROUTING_KEY.to_string(),
        }
    }
}

/// Envelope wrapping an event with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique event ID
    pub id: Uuid,
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
    pub exchange: String,
    pub routing_key: String,
    /// The actual event
    pub event: PaymentEvent,
}

impl EventEnvelope {
    /// Create a new event envelope
    pub fn new(event: PaymentEvent, addressing: &Addressing) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            exchange: addressing.exchange.clone(),
            routing_key: addressing.routing_key.clone(),
            event,
        }
    }
}

/// Broadcast-based event bus
///
/// Cheap to clone (the sender is shared) and safe to use across tasks.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<EventEnvelope>,
    addressing: Addressing,
}

impl EventBus {
    /// Create a new EventBus with the given channel capacity
    ///
    /// The capacity determines how many events can be buffered before
    /// slow receivers start losing events (lagged).
    pub fn new(capacity: usize) -> Self {
        Self::with_addressing(capacity, Addressing::default())
    }

    pub fn with_addressing(capacity: usize, addressing: Addressing) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender, addressing }
    }

    /// Publish an event to all subscribers
    ///
    /// Never fails. Without subscribers the event is dropped.
    /// Returns the number of receivers that will receive the event.
    pub fn emit(&self, event: PaymentEvent) -> usize {
        let envelope = EventEnvelope::new(event, &self.addressing);
        // send() returns Err only if there are no receivers, which is fine
        self.sender.send(envelope).unwrap_or(0)
    }

    /// Subscribe to events published from now on
    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.sender.subscribe()
    }

    /// Get the current number of active subscribers
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }

    pub fn addressing(&self) -> &Addressing {
        &self.addressing
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(1024)
    }
}

#[async_trait]
impl PaymentNotifier for EventBus {
    async fn publish(&self, payment: &Payment) -> Result<(), NotificationError> {
        let receivers = self.emit(PaymentEvent::status_changed(payment));
        tracing::info!(
            exchange = %self.addressing.exchange,
            routing_key = %self.addressing.routing_key,
            id = ?payment.id,
            receivers,
            "published payment event"
        );
        Ok(())
    }
}
