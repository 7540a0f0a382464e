//! Notifier implementations and their construction from configuration
//!
//! The in-process [`EventBus`] lives in [`crate::core::events`]; this module
//! adds the outbound channels and picks one according to
//! [`NotificationsConfig`].

#[cfg(feature = "push")]
pub mod webhook;

#[cfg(feature = "push")]
pub use webhook::WebhookNotifier;

use crate::config::{NotificationsConfig, NotifierKind};
use crate::core::error::ConfigError;
use crate::core::events::EventBus;
use crate::core::notifier::{NoopNotifier, PaymentNotifier};
use std::sync::Arc;

/// A constructed notifier, plus the event bus when the notifier is one
pub struct NotifierSetup {
    pub notifier: Arc<dyn PaymentNotifier>,
    pub event_bus: Option<EventBus>,
}

/// Build the notifier selected by configuration
pub fn from_config(config: &NotificationsConfig) -> Result<NotifierSetup, ConfigError> {
    match config.kind {
        NotifierKind::EventBus => {
            let bus = EventBus::with_addressing(config.capacity, config.addressing());
            Ok(NotifierSetup {
                notifier: Arc::new(bus.clone()),
                event_bus: Some(bus),
            })
        }
        NotifierKind::Disabled => Ok(NotifierSetup {
            notifier: Arc::new(NoopNotifier),
            event_bus: None,
        }),
        NotifierKind::Webhook => webhook_notifier(config),
    }
}

#[cfg(feature = "push")]
fn webhook_notifier(config: &NotificationsConfig) -> Result<NotifierSetup, ConfigError> {
    let url = config
        .webhook_url
        .clone()
        .ok_or_else(|| ConfigError::InvalidValue {
            field: "notifications.webhook_url".to_string(),
            message: "required when notifications.kind is webhook".to_string(),
        })?;

    Ok(NotifierSetup {
        notifier: Arc::new(WebhookNotifier::new(
            url,
            config.addressing(),
            std::time::Duration::from_millis(config.timeout_ms),
        )),
        event_bus: None,
    })
}

#[cfg(not(feature = "push"))]
fn webhook_notifier(_config: &NotificationsConfig) -> Result<NotifierSetup, ConfigError> {
    Err(ConfigError::InvalidValue {
        field: "notifications.kind".to_string(),
        message: "webhook notifications require the `push` feature".to_string(),
    })
}
