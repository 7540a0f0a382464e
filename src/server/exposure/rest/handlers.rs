//! Payment HTTP handlers
//!
//! Handlers decode the request, call the lifecycle service and translate
//! the result. Failures are returned as [`PaymentError`], which renders
//! itself into the error body.

use crate::core::error::{FieldViolation, PaymentError};
use crate::core::mapper::{self, PaymentRequest, PaymentResponse};
use crate::core::service::PaymentService;
use axum::{
    extract::{Path, Query, State, rejection::JsonRejection},
    response::Json,
};
use serde::Deserialize;
use std::sync::Arc;

/// Payment-specific AppState
#[derive(Clone)]
pub struct PaymentAppState {
    pub service: Arc<PaymentService>,
}

/// Query parameters of the status transition endpoint
#[derive(Debug, Deserialize)]
pub struct StatusParams {
    pub status: Option<String>,
}

/// POST /api/v1/payments
pub async fn create_payment(
    State(state): State<PaymentAppState>,
    payload: Result<Json<PaymentRequest>, JsonRejection>,
) -> Result<Json<PaymentResponse>, PaymentError> {
    let Json(request) = payload.map_err(|rejection| PaymentError::MalformedRequest {
        message: rejection.body_text(),
    })?;

    let created = state.service.create(request).await?;
    Ok(Json(mapper::to_response(&created)))
}

/// GET /api/v1/payments
pub async fn list_payments(
    State(state): State<PaymentAppState>,
) -> Result<Json<Vec<PaymentResponse>>, PaymentError> {
    let payments = state.service.get_all().await?;
    Ok(Json(mapper::to_responses(&payments)))
}

/// GET /api/v1/payments/{id}
pub async fn get_payment(
    State(state): State<PaymentAppState>,
    Path(id): Path<String>,
) -> Result<Json<PaymentResponse>, PaymentError> {
    let payment = state.service.get_by_id(&id).await?;
    Ok(Json(mapper::to_response(&payment)))
}

/// PATCH /api/v1/payments/{id}?status=COMPLETED
pub async fn update_payment_status(
    State(state): State<PaymentAppState>,
    Path(id): Path<String>,
    Query(params): Query<StatusParams>,
) -> Result<Json<PaymentResponse>, PaymentError> {
    let status = params.status.ok_or_else(|| {
        PaymentError::Validation(vec![FieldViolation::new("status", "must not be null")])
    })?;

    let updated = state.service.update_status(&id, &status).await?;
    Ok(Json(mapper::to_response(&updated)))
}
