//! Conversions between the external request/response shapes and [`Payment`]
//!
//! No business validation happens here; see [`crate::core::validation`].
//! Inbound conversion never takes an identifier from the caller: `id` is
//! always assigned by the store.

use crate::core::payment::{Payment, PaymentDraft, PaymentId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Creation request as received from a caller
///
/// Every field is optional so that a missing value surfaces as a field
/// violation instead of a decoding failure. The shape has no `id` field, so
/// an identifier supplied by the caller is dropped during decoding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    #[serde(default)]
    pub concept: Option<String>,
    #[serde(default)]
    pub quantity: Option<i32>,
    #[serde(default, alias = "payerRef")]
    pub payer: Option<String>,
    #[serde(default, alias = "recipientRef")]
    pub recipient: Option<String>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Payment as returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub id: Option<PaymentId>,
    pub concept: String,
    pub quantity: i32,
    pub payer: String,
    pub recipient: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    pub status: String,
}

/// Build an unsaved record from a validated draft
pub fn to_entity(draft: PaymentDraft) -> Payment {
    Payment {
        id: None,
        concept: draft.concept,
        quantity: draft.quantity,
        payer: draft.payer,
        recipient: draft.recipient,
        amount: draft.amount,
        status: draft.status,
    }
}

/// Render a record in its external shape
pub fn to_response(payment: &Payment) -> PaymentResponse {
    PaymentResponse {
        id: payment.id.clone(),
        concept: payment.concept.clone(),
        quantity: payment.quantity,
        payer: payment.payer.clone(),
        recipient: payment.recipient.clone(),
        amount: payment.amount,
        status: payment.status.as_str().to_string(),
    }
}

pub fn to_responses(payments: &[Payment]) -> Vec<PaymentResponse> {
    payments.iter().map(to_response).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::status::PaymentStatus;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_request_ignores_supplied_id() {
        let request: PaymentRequest = serde_json::from_value(json!({
            "id": "caller-chosen",
            "concept": "Invoice #1",
            "quantity": 1,
            "payer": "A",
            "recipient": "B",
            "amount": 100.00,
            "status": "PENDING"
        }))
        .unwrap();

        let draft = PaymentDraft {
            concept: request.concept.unwrap(),
            quantity: request.quantity.unwrap(),
            payer: request.payer.unwrap(),
            recipient: request.recipient.unwrap(),
            amount: request.amount.unwrap(),
            status: PaymentStatus::Pending,
        };
        assert!(to_entity(draft).id.is_none());
    }

    #[test]
    fn test_request_accepts_ref_aliases() {
        let request: PaymentRequest = serde_json::from_value(json!({
            "payerRef": "A",
            "recipientRef": "B"
        }))
        .unwrap();
        assert_eq!(request.payer.as_deref(), Some("A"));
        assert_eq!(request.recipient.as_deref(), Some("B"));
        assert!(request.concept.is_none());
    }

    #[test]
    fn test_request_amount_from_number_or_string() {
        let from_number: PaymentRequest = serde_json::from_value(json!({"amount": 12.5})).unwrap();
        let from_string: PaymentRequest =
            serde_json::from_value(json!({"amount": "12.50"})).unwrap();
        assert_eq!(from_number.amount, Some(dec!(12.5)));
        assert_eq!(from_string.amount, Some(dec!(12.50)));
    }

    #[test]
    fn test_response_renders_status_and_numeric_amount() {
        let payment = Payment {
            id: Some(PaymentId::new("p-1")),
            concept: "Invoice #1".to_string(),
            quantity: 2,
            payer: "A".to_string(),
            recipient: "B".to_string(),
            amount: dec!(199.99),
            status: PaymentStatus::Processing,
        };

        let body = serde_json::to_value(to_response(&payment)).unwrap();
        assert_eq!(body["id"], "p-1");
        assert_eq!(body["status"], "PROCESSING");
        assert_eq!(body["amount"].to_string(), "199.99");
        assert_eq!(body["quantity"], 2);
    }

    #[test]
    fn test_amount_keeps_every_digit() {
        let request: PaymentRequest =
            serde_json::from_str(r#"{"amount": 12345678901234567.89}"#).unwrap();
        let amount = request.amount.unwrap();
        assert_eq!(amount.to_string(), "12345678901234567.89");

        let payment = Payment {
            id: None,
            concept: "Large".to_string(),
            quantity: 1,
            payer: "A".to_string(),
            recipient: "B".to_string(),
            amount,
            status: PaymentStatus::Pending,
        };
        let json = serde_json::to_string(&to_response(&payment)).unwrap();
        assert!(json.contains(r#""amount":12345678901234567.89"#));
    }
}
