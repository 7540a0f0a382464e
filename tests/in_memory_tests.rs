//! Integration tests for InMemoryPaymentStore using the storage test harness.
//!
//! Invokes `payment_store_tests!` and `rest_integration_tests!` to validate
//! that the in-memory store conforms to the `PaymentStore` contract.

#[macro_use]
mod storage_harness;

use payments::storage::InMemoryPaymentStore;
use storage_harness::*;

payment_store_tests!(InMemoryPaymentStore::new());
rest_integration_tests!(InMemoryPaymentStore::new());
