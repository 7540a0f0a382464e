//! Configuration loading and management
//!
//! Configuration is a YAML document; every field has a default so an empty
//! document (or no file at all) yields a working in-memory setup. A small
//! set of environment variables override the file.

use crate::core::error::ConfigError;
use crate::core::events::{Addressing, DEFAULT_EXCHANGE, DEFAULT_ROUTING_KEY};
use serde::{Deserialize, Serialize};

/// Environment variable naming the YAML config file
pub const CONFIG_PATH_ENV: &str = "PAYMENTS_CONFIG";
/// Overrides `server.bind_addr`
pub const BIND_ADDR_ENV: &str = "PAYMENTS_BIND_ADDR";
/// Overrides `storage.uri`
pub const MONGODB_URI_ENV: &str = "PAYMENTS_MONGODB_URI";

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Which store adapter to construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    #[default]
    InMemory,
    Mongodb,
}

/// Persistence settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Connection string, used by the MongoDB backend
    pub uri: String,
    pub database: String,
    pub collection: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::InMemory,
            uri: "mongodb://localhost:27017".to_string(),
            database: "payments_db".to_string(),
            collection: "payments".to_string(),
        }
    }
}

/// Which notifier to construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifierKind {
    #[default]
    EventBus,
    Webhook,
    Disabled,
}

/// Status-change notification settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    pub kind: NotifierKind,
    pub exchange: String,
    pub routing_key: String,
    /// Broadcast buffer size for the event bus
    pub capacity: usize,
    /// Target endpoint, required for the webhook notifier
    pub webhook_url: Option<String>,
    pub timeout_ms: u64,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            kind: NotifierKind::EventBus,
            exchange: DEFAULT_EXCHANGE.to_string(),
            routing_key: DEFAULT_ROUTING_KEY.to_string(),
            capacity: 1024,
            webhook_url: None,
            timeout_ms: 2500,
        }
    }
}

impl NotificationsConfig {
    pub fn addressing(&self) -> Addressing {
        Addressing {
            exchange: self.exchange.clone(),
            routing_key: self.routing_key.clone(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub notifications: NotificationsConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load from the file named by `PAYMENTS_CONFIG` (or defaults), then
    /// apply environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_yaml_file(&path)?,
            Err(_) => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (the process environment in `load`)
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(addr) = lookup(BIND_ADDR_ENV) {
            self.server.bind_addr = addr;
        }
        if let Some(uri) = lookup(MONGODB_URI_ENV) {
            self.storage.uri = uri;
        }
    }

    /// Reject combinations that cannot be wired
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.notifications.kind == NotifierKind::EventBus && self.notifications.capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "notifications.capacity".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.notifications.kind == NotifierKind::Webhook
            && self
                .notifications
                .webhook_url
                .as_deref()
                .is_none_or(|url| url.trim().is_empty())
        {
            return Err(ConfigError::InvalidValue {
                field: "notifications.webhook_url".to_string(),
                message: "required when notifications.kind is webhook".to_string(),
            });
        }
        Ok(())
    }
}
