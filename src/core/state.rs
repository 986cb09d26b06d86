//! Shared server state

use std::sync::Arc;

use crate::core::{Config, StoreBackend};
use crate::db;
use crate::db::repository::{
    CatalogStore, DiningTableRepository, MemoryStore, OrderRepository, OrderStore,
    ProductRepository, TableStore,
};
use crate::session::SessionTicketManager;
use crate::utils::AppError;

/// Server state — shared by every request handler
///
/// Cheap to clone: everything behind it is an `Arc`.
///
/// | Field | Role |
/// |-------|------|
/// | config | Immutable configuration |
/// | tickets | Session Ticket Manager (issue / consume) |
/// | tables | Table record store (admin endpoints) |
/// | catalog | Product catalog (read-through listing) |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub tickets: Arc<SessionTicketManager>,
    pub tables: Arc<dyn TableStore>,
    pub catalog: Arc<dyn CatalogStore>,
}

impl ServerState {
    /// Wire up stores and the ticket manager for the configured backend
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let (tables, orders, catalog): (
            Arc<dyn TableStore>,
            Arc<dyn OrderStore>,
            Arc<dyn CatalogStore>,
        ) = match config.store_backend {
            StoreBackend::Surreal => {
                let db = db::connect(&config.db_path()).await?;
                (
                    Arc::new(DiningTableRepository::new(db.clone())),
                    Arc::new(OrderRepository::new(db.clone())),
                    Arc::new(ProductRepository::new(db)),
                )
            }
            StoreBackend::Memory => {
                tracing::warn!("Using volatile in-memory store; data is lost on restart");
                let store = Arc::new(MemoryStore::new());
                (store.clone(), store.clone(), store)
            }
        };

        let tickets = Arc::new(SessionTicketManager::new(
            tables.clone(),
            orders,
            config.session_ttl(),
        ));

        Ok(Self {
            config: config.clone(),
            tickets,
            tables,
            catalog,
        })
    }
}
