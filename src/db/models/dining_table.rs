//! Dining Table Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// An unconsumed ordering ticket bound to a table.
///
/// Token and expiry live and die together; keeping them inside one `Option`
/// on [`DiningTable`] makes "jointly set or jointly absent" unrepresentable
/// to violate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionTicket {
    /// Opaque random token handed to the customer-facing client
    pub token: String,
    /// Instant after which the ticket stops being usable
    pub expires_at: DateTime<Utc>,
}

impl SessionTicket {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }
}

/// Dining table entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTable {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    /// Stable identifier printed on the QR code, unique per venue
    pub table_number: String,
    /// Display name, e.g. "Window 2"
    #[serde(default)]
    pub name: String,
    /// Active ordering ticket, if any. At most one per table; issuing a new
    /// one overwrites (and thus invalidates) the previous one.
    #[serde(default)]
    pub ticket: Option<SessionTicket>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableCreate {
    pub table_number: String,
    pub name: Option<String>,
}
