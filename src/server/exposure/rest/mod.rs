//! REST API exposure
//!
//! Consumes a `ServerHost` and produces an Axum `Router`:
//! - GET    /health, /healthz        - Health check
//! - POST   /api/v1/payments                - Create a payment
//! - GET    /api/v1/payments                - List every payment
//! - GET    /api/v1/payments/{id}           - Get one payment
//! - PATCH  /api/v1/payments/{id}?status=X  - Transition a payment's status

pub mod handlers;

use super::super::host::ServerHost;
use anyhow::Result;
use axum::{Json, Router, routing::get};
use handlers::{
    PaymentAppState, create_payment, get_payment, list_payments, update_payment_status,
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Prefix under which the payment routes are mounted
pub const API_PREFIX: &str = "/api/v1";

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// # Arguments
    ///
    /// * `host` - The server host holding the lifecycle service
    /// * `custom_routes` - Additional custom routes to merge
    pub fn build_router(host: Arc<ServerHost>, custom_routes: Vec<Router>) -> Result<Router> {
        let mut app = Self::health_routes().nest(API_PREFIX, Self::payment_routes(&host));

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app.layer(TraceLayer::new_for_http()))
    }

    fn payment_routes(host: &ServerHost) -> Router {
        let state = PaymentAppState {
            service: host.service.clone(),
        };

        Router::new()
            .route("/payments", get(list_payments).post(create_payment))
            .route(
                "/payments/{id}",
                get(get_payment).patch(update_payment_status),
            )
            .with_state(state)
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "payment-lifecycle"
        }))
    }
}
