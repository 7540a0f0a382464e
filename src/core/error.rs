//! Typed error handling for payment operations
//!
//! Every operation returns a tagged result. The transport layer maps each
//! error kind to its status code and body shape through
//! [`PaymentError::status_code`] and [`PaymentError::to_response`], instead
//! of intercepting failures implicitly.
//!
//! # Error Categories
//!
//! - [`PaymentError`]: errors surfaced to callers of the lifecycle service
//! - [`NotificationError`]: failures of the notification channel, which are
//!   logged at the call site and never surfaced
//! - [`ConfigError`]: errors raised while loading configuration
//!
//! # Example
//!
//! ```rust,ignore
//! match service.get_by_id("missing").await {
//!     Ok(payment) => println!("Found: {:?}", payment),
//!     Err(PaymentError::NotFound { id }) => println!("Payment {} not found", id),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Message attached to every rejected status token
pub const INVALID_STATUS_MESSAGE: &str = "Invalid payment status.";

// =============================================================================
// Field violations
// =============================================================================

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Payment Errors
// =============================================================================

/// Errors returned by the payment lifecycle service
#[derive(Debug, Error)]
pub enum PaymentError {
    /// One or more fields of a creation request are invalid
    #[error("Validation failed: {}", join_violations(.0))]
    Validation(Vec<FieldViolation>),

    /// A status token does not name a member of the status set
    #[error("Invalid payment status '{value}'")]
    InvalidStatus { value: String },

    /// No record exists for the identifier
    #[error("Payment not found with id: {id}")]
    NotFound { id: String },

    /// The request could not be decoded into the expected shape
    #[error("Malformed request: {message}")]
    MalformedRequest { message: String },

    /// Anything else, typically a store failure
    #[error("Unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),
}

/// Error body returned to callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Numeric HTTP status code
    pub status: u16,
    /// Human-readable error message
    pub message: String,
    /// Field-level violations, present only for validation failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldViolation>>,
}

impl PaymentError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            PaymentError::Validation(_)
            | PaymentError::InvalidStatus { .. }
            | PaymentError::MalformedRequest { .. } => StatusCode::BAD_REQUEST,
            PaymentError::NotFound { .. } => StatusCode::NOT_FOUND,
            PaymentError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            PaymentError::Validation(_) => "VALIDATION_ERROR",
            PaymentError::InvalidStatus { .. } => "INVALID_STATUS",
            PaymentError::NotFound { .. } => "PAYMENT_NOT_FOUND",
            PaymentError::MalformedRequest { .. } => "MALFORMED_REQUEST",
            PaymentError::Unexpected(_) => "UNEXPECTED_ERROR",
        }
    }

    /// Convert to the caller-facing error body
    ///
    /// Unexpected failures carry a generic message only.
    pub fn to_response(&self) -> ErrorResponse {
        let (message, errors) = match self {
            PaymentError::Validation(violations) => {
                ("Validation failed".to_string(), Some(violations.clone()))
            }
            PaymentError::InvalidStatus { .. } => (
                "Constraint violation".to_string(),
                Some(vec![FieldViolation::new("status", INVALID_STATUS_MESSAGE)]),
            ),
            PaymentError::NotFound { .. } => (self.to_string(), None),
            PaymentError::MalformedRequest { message } => (message.clone(), None),
            PaymentError::Unexpected(_) => ("Unexpected error occurred".to_string(), None),
        };

        ErrorResponse {
            status: self.status_code().as_u16(),
            message,
            errors,
        }
    }

    /// Violations carried by this error, if any
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            PaymentError::Validation(violations) => violations,
            _ => &[],
        }
    }
}

impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        match &self {
            PaymentError::Validation(violations) => {
                tracing::warn!(?violations, "validation failed")
            }
            PaymentError::InvalidStatus { value } => {
                tracing::warn!(%value, "constraint violation on status")
            }
            PaymentError::NotFound { id } => tracing::info!(%id, "payment not found"),
            PaymentError::MalformedRequest { message } => {
                tracing::warn!(%message, "malformed request")
            }
            PaymentError::Unexpected(err) => tracing::error!(error = ?err, "unexpected error"),
        }

        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Notification Errors
// =============================================================================

/// Failures of the notification channel
///
/// These are contained at the publishing call site and never converted into
/// a [`PaymentError`].
#[derive(Debug, Error)]
pub enum NotificationError {
    /// The channel could not be reached or refused the message
    #[error("Notification channel '{channel}' unavailable: {message}")]
    ChannelUnavailable { channel: String, message: String },

    /// The event could not be encoded
    #[error("Failed to encode notification: {0}")]
    Encoding(#[from] serde_json::Error),
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config content is not valid YAML for the expected shape
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A value is syntactically valid but unusable
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;

// =============================================================================
// Tests
// =============================================================================
