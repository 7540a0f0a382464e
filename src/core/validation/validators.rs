//! Reusable field validators
//!
//! Each rule inspects one value and returns the violation message on
//! failure. Rules other than [`required`] let an absent value pass, so
//! presence and content are reported independently.

use crate::core::error::INVALID_STATUS_MESSAGE;
use crate::core::status::PaymentStatus;
use rust_decimal::Decimal;

/// Validator: value must be present
pub fn required<T: ?Sized>(value: Option<&T>) -> Result<(), String> {
    match value {
        Some(_) => Ok(()),
        None => Err("must not be null".to_string()),
    }
}

/// Validator: text must be present and contain a non-whitespace character
pub fn not_blank(value: Option<&str>) -> Result<(), String> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(()),
        _ => Err("must not be blank".to_string()),
    }
}

/// Validator: number must be strictly greater than zero
pub fn positive(value: Option<&Decimal>) -> Result<(), String> {
    match value {
        Some(num) if *num <= Decimal::ZERO => Err("must be greater than 0".to_string()),
        _ => Ok(()),
    }
}

/// Validator: text must name a payment status
pub fn valid_status(value: Option<&str>) -> Result<(), String> {
    if PaymentStatus::is_member(value) {
        Ok(())
    } else {
        Err(INVALID_STATUS_MESSAGE.to_string())
    }
}
