//! MongoDB storage backend using the official MongoDB async driver.
//!
//! # Feature flag
//!
//! This module is gated behind the `mongodb_backend` feature flag:
//! ```toml
//! [dependencies]
//! payment-lifecycle = { version = "0.1", features = ["mongodb_backend"] }
//! ```
//!
//! # Storage model
//!
//! All payments live in one collection (`payments` by default). The record
//! `id` is the hex form of the document's `_id` ObjectId, generated by the
//! server on first insert. Identifiers that are not valid ObjectIds cannot
//! exist in the collection and resolve to "absent".

use crate::core::PaymentStore;
use crate::core::payment::{Payment, PaymentId};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document, doc};
use mongodb::{Client, Collection, Database};

/// Default collection name
pub const DEFAULT_COLLECTION: &str = "payments";

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

/// Serialize a payment without its `id`; `_id` is handled separately.
fn payment_to_document(payment: &Payment) -> Result<Document> {
    let mut doc = mongodb::bson::to_document(payment)
        .map_err(|e| anyhow!("Failed to serialize payment: {}", e))?;
    doc.remove("id");
    Ok(doc)
}

/// Deserialize a stored document, mapping `_id` back onto `id`.
fn document_to_payment(mut doc: Document) -> Result<Payment> {
    if let Some(id) = doc.remove("_id") {
        let id = match id {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(s) => s,
            other => return Err(anyhow!("Unexpected _id type: {}", other)),
        };
        doc.insert("id", id);
    }

    mongodb::bson::from_document(doc)
        .map_err(|e| anyhow!("Failed to deserialize payment from document: {}", e))
}

fn object_id(id: &PaymentId) -> Option<ObjectId> {
    ObjectId::parse_str(id.as_str()).ok()
}

// ---------------------------------------------------------------------------
// MongoPaymentStore
// ---------------------------------------------------------------------------

/// Payment store backed by a MongoDB collection
///
/// # Example
///
/// ```rust,ignore
/// let store = MongoPaymentStore::connect("mongodb://localhost:27017", "payments_db", "payments").await?;
/// let saved = store.save(payment).await?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoPaymentStore {
    collection: Collection<Document>,
}

impl MongoPaymentStore {
    /// Create a store over `collection` in the given database.
    pub fn new(database: &Database, collection: &str) -> Self {
        Self {
            collection: database.collection(collection),
        }
    }

    /// Connect to a MongoDB deployment and open the collection.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| anyhow!("Failed to connect to MongoDB: {}", e))?;
        Ok(Self::new(&client.database(database), collection))
    }
}

#[async_trait]
impl PaymentStore for MongoPaymentStore {
    /// Insert when the payment has no `id`, otherwise replace (upsert) by `_id`.
    async fn save(&self, mut payment: Payment) -> Result<Payment> {
        let doc = payment_to_document(&payment)?;

        match payment.id.clone() {
            None => {
                let result = self
                    .collection
                    .insert_one(doc)
                    .await
                    .map_err(|e| anyhow!("Failed to insert payment: {}", e))?;
                let oid = result
                    .inserted_id
                    .as_object_id()
                    .ok_or_else(|| anyhow!("Inserted payment has no ObjectId"))?;
                payment.id = Some(PaymentId::new(oid.to_hex()));
            }
            Some(id) => {
                let oid = object_id(&id).ok_or_else(|| anyhow!("Invalid payment id: {}", id))?;
                self.collection
                    .replace_one(doc! { "_id": oid }, doc)
                    .upsert(true)
                    .await
                    .map_err(|e| anyhow!("Failed to update payment: {}", e))?;
            }
        }

        Ok(payment)
    }

    async fn find_by_id(&self, id: &PaymentId) -> Result<Option<Payment>> {
        let Some(oid) = object_id(id) else {
            return Ok(None);
        };

        let doc = self
            .collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(|e| anyhow!("Failed to get payment: {}", e))?;

        doc.map(document_to_payment).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Payment>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await
            .map_err(|e| anyhow!("Failed to list payments: {}", e))?;

        let docs: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| anyhow!("Failed to collect payments: {}", e))?;

        docs.into_iter().map(document_to_payment).collect()
    }
}
