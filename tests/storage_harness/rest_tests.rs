//! Macro-generated REST integration tests for store backends.
//!
//! Each generated test builds the full router (`ServerBuilder` → handlers →
//! `PaymentService` → store) around a fresh store and drives it with
//! `axum_test::TestServer`.
//!
//! # Generated Tests
//!
//! - `test_rest_create` - POST returns the stored record with status `PENDING`
//! - `test_rest_get` - GET by id returns the same record
//! - `test_rest_list` - GET lists every created record
//! - `test_rest_update_status` - PATCH changes the status and nothing else
//! - `test_rest_invalid_status` - PATCH with an unknown status → 400, no change
//! - `test_rest_not_found` - GET unknown id → 404
//! - `test_rest_invalid_create` - rejected create leaves the store empty

/// Generate the REST integration suite for a store factory.
#[macro_export]
macro_rules! rest_integration_tests {
    ($factory:expr) => {
        mod rest_integration_tests {
            use super::*;
            use axum::http::StatusCode;
            use axum_test::TestServer;
            use payments::server::ServerBuilder;
            use serde_json::{Value, json};

            async fn make_server() -> TestServer {
                let store = $factory;
                let router = ServerBuilder::new()
                    .with_store(store)
                    .with_event_bus(16)
                    .build()
                    .unwrap();
                TestServer::new(router)
            }

            async fn create(server: &TestServer, concept: &str) -> Value {
                let response = server.post("/api/v1/payments").json(&sample_request(concept)).await;
                response.assert_status(StatusCode::OK);
                response.json()
            }

            // ==============================================================
            // CRUD
            // ==============================================================

            #[tokio::test]
            async fn test_rest_create() {
                let server = make_server().await;

                let body = create(&server, "Invoice #1").await;
                assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
                assert_eq!(body["concept"], "Invoice #1");
                assert_eq!(body["quantity"], 1);
                assert_eq!(body["payer"], "A");
                assert_eq!(body["recipient"], "B");
                assert_eq!(body["amount"].as_f64(), Some(100.0));
                assert_eq!(body["status"], "PENDING");
            }

            #[tokio::test]
            async fn test_rest_get() {
                let server = make_server().await;
                let created = create(&server, "Invoice #2").await;
                let id = created["id"].as_str().unwrap();

                let response = server.get(&format!("/api/v1/payments/{}", id)).await;
                response.assert_status(StatusCode::OK);

                let body: Value = response.json();
                assert_eq!(body, created);
            }

            #[tokio::test]
            async fn test_rest_list() {
                let server = make_server().await;
                create(&server, "First").await;
                create(&server, "Second").await;

                let response = server.get("/api/v1/payments").await;
                response.assert_status(StatusCode::OK);

                let body: Value = response.json();
                let items = body.as_array().unwrap();
                assert_eq!(items.len(), 2);
                assert!(items.iter().any(|p| p["concept"] == "First"));
                assert!(items.iter().any(|p| p["concept"] == "Second"));
            }

            // ==============================================================
            // Status transitions
            // ==============================================================

            #[tokio::test]
            async fn test_rest_update_status() {
                let server = make_server().await;
                let created = create(&server, "Invoice #3").await;
                let id = created["id"].as_str().unwrap();

                let response = server
                    .patch(&format!("/api/v1/payments/{}", id))
                    .add_query_param("status", "COMPLETED")
                    .await;
                response.assert_status(StatusCode::OK);

                let body: Value = response.json();
                assert_eq!(body["id"], created["id"]);
                assert_eq!(body["status"], "COMPLETED");
                assert_eq!(body["concept"], created["concept"]);
                assert_eq!(body["amount"], created["amount"]);

                let fetched: Value = server.get(&format!("/api/v1/payments/{}", id)).await.json();
                assert_eq!(fetched["status"], "COMPLETED");
            }

            #[tokio::test]
            async fn test_rest_invalid_status() {
                let server = make_server().await;
                let created = create(&server, "Invoice #4").await;
                let id = created["id"].as_str().unwrap();

                let response = server
                    .patch(&format!("/api/v1/payments/{}", id))
                    .add_query_param("status", "REFUNDED")
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);

                let body: Value = response.json();
                assert_eq!(body["status"], 400);
                assert_eq!(body["errors"][0]["field"], "status");

                let fetched: Value = server.get(&format!("/api/v1/payments/{}", id)).await.json();
                assert_eq!(fetched["status"], "PENDING");
            }

            // ==============================================================
            // Error handling
            // ==============================================================

            #[tokio::test]
            async fn test_rest_not_found() {
                let server = make_server().await;

                let response = server.get("/api/v1/payments/nonexistent-id").await;
                response.assert_status(StatusCode::NOT_FOUND);

                let body: Value = response.json();
                assert_eq!(body["status"], 404);
                assert_eq!(body["message"], "Payment not found with id: nonexistent-id");
            }

            #[tokio::test]
            async fn test_rest_invalid_create() {
                let server = make_server().await;

                let mut request = sample_request("Broken");
                request["amount"] = json!(-5);
                let response = server.post("/api/v1/payments").json(&request).await;
                response.assert_status(StatusCode::BAD_REQUEST);

                let listed: Value = server.get("/api/v1/payments").await.json();
                assert_eq!(listed, json!([]));
            }
        }
    };
}
