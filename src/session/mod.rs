//! Session Ticket Manager
//!
//! The only gate between "a customer scanned a QR code" and "an order was
//! recorded". Issues a per-table `(token, expiry)` ticket, validates it on
//! order submission, and consumes it so each ticket admits exactly one
//! order.
//!
//! # Ticket lifecycle per table
//!
//! ```text
//! EMPTY ──issue──▶ ACTIVE ──consume (place_order)──▶ EMPTY
//!                    │
//!                    └──expiry (time-based, no write)──▶ unusable
//! ```
//!
//! The manager holds no persisted state of its own; it owns the protocol of
//! reads and writes against the two injected stores.

mod error;
mod token;

pub use error::TicketError;
pub use token::generate_token;

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::db::models::{NewOrder, Order, OrderItem, SessionTicket};
use crate::db::repository::{OrderStore, TableStore};

/// Result of [`SessionTicketManager::issue`]: the ordering credential handed
/// to the customer-facing client via redirect.
#[derive(Debug, Clone, Serialize)]
pub struct IssuedTicket {
    pub table_number: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Inputs to [`SessionTicketManager::place_order`], as received from the
/// HTTP layer.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceOrderRequest {
    pub table_number: String,
    /// The token from the QR-code redirect
    pub session_code: String,
    pub items: Vec<OrderItem>,
    pub total_price: f64,
}

pub struct SessionTicketManager {
    tables: Arc<dyn TableStore>,
    orders: Arc<dyn OrderStore>,
    ttl: Duration,
    /// Per-table serialization of ticket consumption. The stores are shared
    /// by all concurrent requests; without this scope, two `place_order`
    /// calls for the same table could both pass the token check before
    /// either invalidates the ticket.
    table_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl SessionTicketManager {
    pub fn new(tables: Arc<dyn TableStore>, orders: Arc<dyn OrderStore>, ttl: Duration) -> Self {
        Self {
            tables,
            orders,
            ttl,
            table_locks: DashMap::new(),
        }
    }

    /// Issue a fresh single-use ticket for `table_number`.
    ///
    /// Unconditionally overwrites any prior unconsumed ticket for the table,
    /// which stops matching (and is therefore invalid) immediately.
    pub async fn issue(&self, table_number: &str) -> Result<IssuedTicket, TicketError> {
        if table_number.trim().is_empty() {
            return Err(TicketError::InvalidRequest(
                "table number is required".to_string(),
            ));
        }

        self.tables
            .get(table_number)
            .await?
            .ok_or_else(|| TicketError::TableNotFound(table_number.to_string()))?;

        let ticket = SessionTicket {
            token: token::generate_token(),
            expires_at: Utc::now() + self.ttl,
        };
        self.tables
            .set_ticket(table_number, Some(ticket.clone()))
            .await?;

        info!(table_number, expires_at = %ticket.expires_at, "session ticket issued");

        Ok(IssuedTicket {
            table_number: table_number.to_string(),
            token: ticket.token,
            expires_at: ticket.expires_at,
        })
    }

    /// Consume the ticket and record the order.
    ///
    /// Sequence: validate input, read ticket state, compare token, check
    /// expiry, insert the order, then clear the ticket with a conditional
    /// write. An insert failure leaves the ticket active for retry; a failed
    /// invalidation after a durable insert is reported, never retried
    /// blindly.
    pub async fn place_order(&self, req: PlaceOrderRequest) -> Result<Order, TicketError> {
        // Fail fast before touching either store
        if req.table_number.trim().is_empty() {
            return Err(TicketError::InvalidRequest(
                "table number is required".to_string(),
            ));
        }
        if req.session_code.is_empty() {
            return Err(TicketError::InvalidRequest(
                "session code is required".to_string(),
            ));
        }
        if req.items.is_empty() {
            return Err(TicketError::InvalidRequest(
                "order must contain at least one item".to_string(),
            ));
        }

        let lock = self
            .table_locks
            .entry(req.table_number.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let _guard = lock.lock().await;

        let table = self
            .tables
            .get(&req.table_number)
            .await?
            .ok_or_else(|| TicketError::TableNotFound(req.table_number.clone()))?;

        let ticket = match table.ticket {
            Some(t) if t.token == req.session_code => t,
            // Covers a missing ticket (already consumed, or never issued)
            // as well as a mismatched one.
            _ => return Err(TicketError::InvalidTicket),
        };
        if ticket.is_expired(Utc::now()) {
            return Err(TicketError::TicketExpired);
        }

        let order = self
            .orders
            .insert(NewOrder {
                table_number: req.table_number.clone(),
                items: req.items,
                total_price: req.total_price,
            })
            .await
            .map_err(|e| TicketError::OrderPersistence(e.to_string()))?;

        // The order is durable from here on. Clearing the ticket is a
        // conditional write, so a ticket replaced in the meantime (re-issue)
        // is left alone.
        match self
            .tables
            .consume_ticket(&req.table_number, &req.session_code)
            .await
        {
            Ok(true) => {}
            Ok(false) => warn!(
                table_number = %req.table_number,
                "ticket changed between validation and consumption"
            ),
            Err(e) => warn!(
                table_number = %req.table_number,
                error = %e,
                "failed to invalidate consumed ticket; double order possible"
            ),
        }

        info!(
            table_number = %req.table_number,
            total_price = req.total_price,
            "order placed, ticket consumed"
        );

        Ok(order)
    }
}
