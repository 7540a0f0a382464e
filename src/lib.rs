//! # Payment Lifecycle
//!
//! Tracks payment records through a closed set of statuses and notifies an
//! external channel whenever a status changes.
//!
//! ## Features
//!
//! - **Status Model**: `PENDING`, `PROCESSING`, `COMPLETED`, `FAILED`, parsed case-insensitively
//! - **Validation**: every violated field is reported, not just the first
//! - **Pluggable Storage**: in-memory by default, MongoDB behind `mongodb_backend`
//! - **Best-effort Notifications**: in-process event bus, or webhooks behind `push`
//! - **REST Exposure**: Axum routes with a uniform error body
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use payments::prelude::*;
//!
//! let app = ServerBuilder::new()
//!     .with_store(InMemoryPaymentStore::new())
//!     .with_event_bus(1024)
//!     .build()?;
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod notifications;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        Addressing, ErrorResponse, EventBus, EventEnvelope, FieldViolation, NoopNotifier,
        NotificationError, Payment, PaymentDraft, PaymentError, PaymentEvent, PaymentId,
        PaymentNotifier, PaymentRequest, PaymentResponse, PaymentResult, PaymentService,
        PaymentStatus, PaymentStore,
    };

    // === Storage ===
    pub use crate::storage::InMemoryPaymentStore;
    #[cfg(feature = "mongodb_backend")]
    pub use crate::storage::MongoPaymentStore;

    // === Notifications ===
    #[cfg(feature = "push")]
    pub use crate::notifications::WebhookNotifier;

    // === Config ===
    pub use crate::config::AppConfig;

    // === Server ===
    pub use crate::server::{RestExposure, ServerBuilder, ServerHost};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use rust_decimal::Decimal;
}
