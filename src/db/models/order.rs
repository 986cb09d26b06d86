//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// A single order line as submitted by the client.
///
/// The ordering core treats line items as opaque beyond "non-empty"; prices
/// and the total are caller-supplied and not recomputed server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    /// Catalog reference, when the client has one
    pub product_id: Option<String>,
    #[serde(default)]
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

/// Order creation payload, validated by the session module before insert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrder {
    pub table_number: String,
    pub items: Vec<OrderItem>,
    pub total_price: f64,
}

/// Persisted order record
///
/// Created exactly once per successful ticket consumption; never mutated or
/// deleted afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    /// Reference to the table, not ownership; the table outlives the order
    pub table_number: String,
    pub items: Vec<OrderItem>,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}
