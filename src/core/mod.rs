//! Core module containing the payment model, its contracts and the lifecycle service

pub mod error;
pub mod events;
pub mod mapper;
pub mod notifier;
pub mod payment;
pub mod service;
pub mod status;
pub mod store;
pub mod validation;

pub use error::{ErrorResponse, FieldViolation, NotificationError, PaymentError, PaymentResult};
pub use events::{Addressing, EventBus, EventEnvelope, PaymentEvent};
pub use mapper::{PaymentRequest, PaymentResponse};
pub use notifier::{NoopNotifier, PaymentNotifier};
pub use payment::{Payment, PaymentDraft, PaymentId};
pub use service::PaymentService;
pub use status::PaymentStatus;
pub use store::PaymentStore;
