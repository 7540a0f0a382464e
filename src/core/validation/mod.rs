//! Validation of creation input
//!
//! Rules from [`validators`] are applied field by field and every failure is
//! collected before the request is rejected, so callers see all offending
//! fields at once.

pub mod validators;

use crate::core::error::{FieldViolation, PaymentError};
use crate::core::mapper::PaymentRequest;
use crate::core::payment::PaymentDraft;
use crate::core::status::PaymentStatus;

/// Accumulates field violations across several rule checks
#[derive(Debug, Default)]
pub struct Violations {
    errors: Vec<FieldViolation>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a rule for `field`
    pub fn check(&mut self, field: &str, outcome: Result<(), String>) -> &mut Self {
        if let Err(message) = outcome {
            self.errors.push(FieldViolation::new(field, message));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_vec(self) -> Vec<FieldViolation> {
        self.errors
    }

    /// `Ok` when nothing was recorded, otherwise a validation error
    pub fn into_result(self) -> Result<(), PaymentError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(PaymentError::Validation(self.errors))
        }
    }
}

/// Validate a creation request and produce a typed draft
pub fn validate_create(request: &PaymentRequest) -> Result<PaymentDraft, PaymentError> {
    let mut violations = Violations::new();
    violations
        .check("concept", validators::not_blank(request.concept.as_deref()))
        .check("quantity", validators::required(request.quantity.as_ref()))
        .check("payer", validators::not_blank(request.payer.as_deref()))
        .check("recipient", validators::not_blank(request.recipient.as_deref()))
        .check("amount", validators::required(request.amount.as_ref()))
        .check("amount", validators::positive(request.amount.as_ref()))
        .check("status", validators::required(request.status.as_deref()))
        .check("status", validators::valid_status(request.status.as_deref()));
    violations.into_result()?;

    match (
        &request.concept,
        request.quantity,
        &request.payer,
        &request.recipient,
        request.amount,
        &request.status,
    ) {
        (Some(concept), Some(quantity), Some(payer), Some(recipient), Some(amount), Some(status)) => {
            Ok(PaymentDraft {
                concept: concept.clone(),
                quantity,
                payer: payer.clone(),
                recipient: recipient.clone(),
                amount,
                status: PaymentStatus::parse(status)?,
            })
        }
        _ => Err(PaymentError::Validation(vec![FieldViolation::new(
            "request",
            "incomplete payment request",
        )])),
    }
}
