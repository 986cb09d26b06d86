//! Dining Table Repository

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, StoreError, StoreResult, TableStore};
use crate::db::models::{DiningTable, DiningTableCreate, SessionTicket};

const TABLE: &str = "dining_table";

#[derive(Clone)]
pub struct DiningTableRepository {
    base: BaseRepository,
}

impl DiningTableRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find table by its QR identifier
    async fn find_by_number(&self, table_number: &str) -> StoreResult<Option<DiningTable>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM dining_table WHERE table_number = $table_number LIMIT 1")
            .bind(("table_number", table_number.to_string()))
            .await?;
        let tables: Vec<DiningTable> = result.take(0)?;
        Ok(tables.into_iter().next())
    }
}

#[async_trait]
impl TableStore for DiningTableRepository {
    async fn get(&self, table_number: &str) -> StoreResult<Option<DiningTable>> {
        self.find_by_number(table_number).await
    }

    async fn list(&self) -> StoreResult<Vec<DiningTable>> {
        let tables: Vec<DiningTable> = self
            .base
            .db()
            .query("SELECT * FROM dining_table WHERE is_active = true ORDER BY table_number")
            .await?
            .take(0)?;
        Ok(tables)
    }

    async fn create(&self, data: DiningTableCreate) -> StoreResult<DiningTable> {
        if self.find_by_number(&data.table_number).await?.is_some() {
            return Err(StoreError::Duplicate(format!(
                "Table '{}' already exists",
                data.table_number
            )));
        }

        let table = DiningTable {
            id: None,
            table_number: data.table_number,
            name: data.name.unwrap_or_default(),
            ticket: None,
            is_active: true,
        };

        let created: Option<DiningTable> = self.base.db().create(TABLE).content(table).await?;
        created.ok_or_else(|| StoreError::Backend("Failed to create dining table".to_string()))
    }

    async fn set_ticket(
        &self,
        table_number: &str,
        ticket: Option<SessionTicket>,
    ) -> StoreResult<()> {
        self.base
            .db()
            .query("UPDATE dining_table SET ticket = $ticket WHERE table_number = $table_number")
            .bind(("ticket", ticket))
            .bind(("table_number", table_number.to_string()))
            .await?;
        Ok(())
    }

    async fn consume_ticket(&self, table_number: &str, expected_token: &str) -> StoreResult<bool> {
        // Single conditional write: the ticket is cleared only while the
        // stored token still matches, so two concurrent consumers cannot
        // both see a match.
        let mut result = self
            .base
            .db()
            .query(
                "UPDATE dining_table SET ticket = NONE \
                 WHERE table_number = $table_number AND ticket.token = $token \
                 RETURN BEFORE",
            )
            .bind(("table_number", table_number.to_string()))
            .bind(("token", expected_token.to_string()))
            .await?;
        let touched: Vec<DiningTable> = result.take(0)?;
        Ok(!touched.is_empty())
    }
}
