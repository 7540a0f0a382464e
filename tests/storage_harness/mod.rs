//! Shared test harness for payment store testing
//!
//! Provides sample payments and request bodies, plus two macro-generated
//! suites that every store backend runs:
//! - `payment_store_tests!` exercises the `PaymentStore` contract directly
//! - `rest_integration_tests!` drives the same store through the HTTP layer
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//!
//! payment_store_tests!(InMemoryPaymentStore::new());
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod payment_store_tests;

#[macro_use]
pub mod rest_tests;

use payments::core::{Payment, PaymentStatus};
use rust_decimal_macros::dec;
use serde_json::{Value, json};

// ---------------------------------------------------------------------------
// Factory helpers
// ---------------------------------------------------------------------------

/// An unsaved `PENDING` payment with the given concept
pub fn sample_payment(concept: &str) -> Payment {
    Payment {
        id: None,
        concept: concept.to_string(),
        quantity: 1,
        payer: "A".to_string(),
        recipient: "B".to_string(),
        amount: dec!(100.00),
        status: PaymentStatus::Pending,
    }
}

/// `n` unsaved payments named `Payment 0` through `Payment n-1`
pub fn sample_batch(n: usize) -> Vec<Payment> {
    (0..n)
        .map(|i| sample_payment(&format!("Payment {}", i)))
        .collect()
}

/// A valid creation body as a caller would send it
pub fn sample_request(concept: &str) -> Value {
    json!({
        "concept": concept,
        "quantity": 1,
        "payer": "A",
        "recipient": "B",
        "amount": 100.00,
        "status": "PENDING"
    })
}

// ---------------------------------------------------------------------------
// Assertion helpers
// ---------------------------------------------------------------------------

/// Assert that two payments agree on every field except `id` and `status`
pub fn assert_same_details(actual: &Payment, expected: &Payment) {
    assert_eq!(actual.concept, expected.concept, "concept mismatch");
    assert_eq!(actual.quantity, expected.quantity, "quantity mismatch");
    assert_eq!(actual.payer, expected.payer, "payer mismatch");
    assert_eq!(actual.recipient, expected.recipient, "recipient mismatch");
    assert_eq!(actual.amount, expected.amount, "amount mismatch");
}

/// Assert that a list has the expected length
pub fn assert_count<T>(list: &[T], expected: usize) {
    assert_eq!(
        list.len(),
        expected,
        "Expected {} items, got {}",
        expected,
        list.len()
    );
}
