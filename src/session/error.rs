//! Ticket error taxonomy

use thiserror::Error;

use crate::db::repository::StoreError;
use crate::utils::AppError;

/// Errors surfaced by the Session Ticket Manager
///
/// Each variant tells the caller something different: `InvalidTicket` and
/// `TicketExpired` mean "re-scan the QR code", `OrderPersistence` and
/// `StoreUnavailable` mean "retry", the rest mean the request itself was
/// wrong.
#[derive(Debug, Error)]
pub enum TicketError {
    /// Malformed input, rejected before any store access
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Referenced table does not exist
    #[error("Table '{0}' not found")]
    TableNotFound(String),

    /// Token missing, mismatched, or already consumed
    #[error("Invalid or already used session ticket")]
    InvalidTicket,

    /// Token matched but the ticket window has passed
    #[error("Session ticket expired")]
    TicketExpired,

    /// The order insert failed; the ticket is left active so the customer
    /// can retry without re-scanning
    #[error("Failed to persist order: {0}")]
    OrderPersistence(String),

    /// Transient store failure; nothing was committed, safe to retry
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<StoreError> for TicketError {
    fn from(err: StoreError) -> Self {
        // A store failure on the read/validate path never commits anything,
        // so it is always reported as retryable rather than "ticket invalid".
        TicketError::StoreUnavailable(err.to_string())
    }
}

impl From<TicketError> for AppError {
    fn from(err: TicketError) -> Self {
        match err {
            TicketError::InvalidRequest(msg) => AppError::Invalid(msg),
            TicketError::TableNotFound(table) => {
                AppError::NotFound(format!("Table '{table}' not found"))
            }
            TicketError::InvalidTicket => AppError::InvalidTicket,
            TicketError::TicketExpired => AppError::TicketExpired,
            TicketError::OrderPersistence(msg) => AppError::Database(msg),
            TicketError::StoreUnavailable(msg) => AppError::Unavailable(msg),
        }
    }
}
