//! Macro-generated test suite for `PaymentStore` contract validation.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use payments::storage::InMemoryPaymentStore;
//!
//! payment_store_tests!(InMemoryPaymentStore::new());
//! ```
//!
//! # Generated Tests
//!
//! - `test_save_assigns_id` - first save fills in an identifier
//! - `test_save_then_find` - a saved record is found with every field intact
//! - `test_find_unknown_id` - lookup of an unknown id is `None`, not an error
//! - `test_save_existing_replaces` - saving a known id overwrites in place
//! - `test_list_empty` - an empty store lists nothing
//! - `test_list_multiple` - every saved record is listed once
//! - `test_amount_precision` - decimal amounts come back unchanged
//! - `test_concurrent_saves` - parallel saves from spawned tasks

/// Generate a full `PaymentStore` conformance test suite.
///
/// `$factory` is re-evaluated for each test and must produce an empty store.
/// For the concurrent test the store must also be `Clone + 'static`.
#[macro_export]
macro_rules! payment_store_tests {
    ($factory:expr) => {
        mod payment_store_contract_tests {
            use super::*;
            use payments::core::{PaymentId, PaymentStatus, PaymentStore};
            use rust_decimal_macros::dec;

            // ==================================================================
            // Save & Find
            // ==================================================================

            #[tokio::test]
            async fn test_save_assigns_id() {
                let store = $factory;
                let saved = store.save(sample_payment("Invoice #1")).await.unwrap();

                let id = saved.id.clone().expect("save must assign an id");
                assert!(!id.as_str().is_empty());
                assert_same_details(&saved, &sample_payment("Invoice #1"));
            }

            #[tokio::test]
            async fn test_save_then_find() {
                let store = $factory;
                let saved = store.save(sample_payment("Invoice #2")).await.unwrap();
                let id = saved.id.clone().unwrap();

                let found = store.find_by_id(&id).await.unwrap();
                assert_eq!(found, Some(saved));
            }

            #[tokio::test]
            async fn test_find_unknown_id() {
                let store = $factory;
                store.save(sample_payment("Invoice #3")).await.unwrap();

                let found = store
                    .find_by_id(&PaymentId::from("nonexistent-id"))
                    .await
                    .unwrap();
                assert!(found.is_none());
            }

            #[tokio::test]
            async fn test_save_existing_replaces() {
                let store = $factory;
                let saved = store.save(sample_payment("Invoice #4")).await.unwrap();
                let id = saved.id.clone().unwrap();

                let updated = store
                    .save(saved.with_status(PaymentStatus::Completed))
                    .await
                    .unwrap();
                assert_eq!(updated.id.as_ref(), Some(&id));

                let found = store.find_by_id(&id).await.unwrap().unwrap();
                assert_eq!(found.status, PaymentStatus::Completed);
                assert_same_details(&found, &saved);

                let all = store.list_all().await.unwrap();
                assert_count(&all, 1);
            }

            // ==================================================================
            // List
            // ==================================================================

            #[tokio::test]
            async fn test_list_empty() {
                let store = $factory;
                let all = store.list_all().await.unwrap();
                assert!(all.is_empty());
            }

            #[tokio::test]
            async fn test_list_multiple() {
                let store = $factory;
                for payment in sample_batch(5) {
                    store.save(payment).await.unwrap();
                }

                let all = store.list_all().await.unwrap();
                assert_count(&all, 5);
                for i in 0..5 {
                    let concept = format!("Payment {}", i);
                    assert!(
                        all.iter().any(|p| p.concept == concept),
                        "missing {}",
                        concept
                    );
                }
                assert!(all.iter().all(|p| p.id.is_some()));
            }

            // ==================================================================
            // Edge Cases
            // ==================================================================

            #[tokio::test]
            async fn test_amount_precision() {
                let store = $factory;
                let mut payment = sample_payment("Precise");
                payment.amount = dec!(1234.56);

                let saved = store.save(payment).await.unwrap();
                let found = store
                    .find_by_id(saved.id.as_ref().unwrap())
                    .await
                    .unwrap()
                    .unwrap();
                assert_eq!(found.amount, dec!(1234.56));
            }

            #[tokio::test]
            async fn test_concurrent_saves() {
                let store = $factory;
                let mut handles = Vec::new();

                for payment in sample_batch(10) {
                    let store = store.clone();
                    handles.push(tokio::spawn(async move { store.save(payment).await }));
                }

                for handle in handles {
                    handle.await.unwrap().unwrap();
                }

                let all = store.list_all().await.unwrap();
                assert_count(&all, 10);
            }
        }
    };
}
