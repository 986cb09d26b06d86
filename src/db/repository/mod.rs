//! Store traits and repositories
//!
//! The ordering core talks to its backing stores only through the narrow
//! traits below, so tests (and the `memory` backend) can swap in fakes.
//! The SurrealDB repositories are the production implementations.

pub mod dining_table;
pub mod memory;
pub mod order;
pub mod product;

// Re-exports
pub use dining_table::DiningTableRepository;
pub use memory::MemoryStore;
pub use order::OrderRepository;
pub use product::ProductRepository;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

use crate::db::models::{DiningTable, DiningTableCreate, NewOrder, Order, Product, SessionTicket};

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transient failure reaching the store; nothing was committed, safe to
    /// retry with backoff.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Unique constraint violation
    #[error("Duplicate: {0}")]
    Duplicate(String),

    /// The store rejected or failed the operation
    #[error("Store error: {0}")]
    Backend(String),
}

impl From<surrealdb::Error> for StoreError {
    fn from(err: surrealdb::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Keyed record store for dining tables.
///
/// Point lookup by `table_number`, plus the two ticket writes the session
/// core needs: an unconditional overwrite (issuance) and a conditional
/// clear (consumption).
#[async_trait]
pub trait TableStore: Send + Sync {
    async fn get(&self, table_number: &str) -> StoreResult<Option<DiningTable>>;

    async fn list(&self) -> StoreResult<Vec<DiningTable>>;

    async fn create(&self, data: DiningTableCreate) -> StoreResult<DiningTable>;

    /// Unconditionally overwrite the table's ticket fields. `None` clears
    /// them; `Some` replaces whatever ticket was there before.
    async fn set_ticket(
        &self,
        table_number: &str,
        ticket: Option<SessionTicket>,
    ) -> StoreResult<()>;

    /// Clear the ticket only if the stored token still equals
    /// `expected_token` (compare-and-swap). Returns whether the conditional
    /// update matched.
    async fn consume_ticket(&self, table_number: &str, expected_token: &str) -> StoreResult<bool>;
}

/// Append-only order store
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Insert an order and return the persisted record.
    async fn insert(&self, order: NewOrder) -> StoreResult<Order>;
}

/// Read-through product catalog
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn list_products(&self) -> StoreResult<Vec<Product>>;
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
