//! In-memory store
//!
//! Backs the `memory` store backend and every test that needs an injectable
//! fake for the table/order/catalog stores. Per-table atomicity comes from
//! DashMap shard locking: `get_mut` holds the shard for the whole
//! compare-and-clear in [`TableStore::consume_ticket`].

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use parking_lot::Mutex;
use surrealdb::RecordId;
use uuid::Uuid;

use super::{CatalogStore, OrderStore, StoreError, StoreResult, TableStore};
use crate::db::models::{DiningTable, DiningTableCreate, NewOrder, Order, Product, SessionTicket};

#[derive(Default)]
pub struct MemoryStore {
    tables: DashMap<String, DiningTable>,
    orders: Mutex<Vec<Order>>,
    products: Mutex<Vec<Product>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a table with no active ticket
    pub fn add_table(&self, table_number: &str) {
        self.tables.insert(
            table_number.to_string(),
            DiningTable {
                id: None,
                table_number: table_number.to_string(),
                name: String::new(),
                ticket: None,
                is_active: true,
            },
        );
    }

    pub fn add_product(&self, product: Product) {
        self.products.lock().push(product);
    }

    /// Snapshot of all persisted orders
    pub fn orders(&self) -> Vec<Order> {
        self.orders.lock().clone()
    }
}

#[async_trait]
impl TableStore for MemoryStore {
    async fn get(&self, table_number: &str) -> StoreResult<Option<DiningTable>> {
        Ok(self.tables.get(table_number).map(|t| t.clone()))
    }

    async fn list(&self) -> StoreResult<Vec<DiningTable>> {
        let mut tables: Vec<DiningTable> =
            self.tables.iter().map(|entry| entry.value().clone()).collect();
        tables.sort_by(|a, b| a.table_number.cmp(&b.table_number));
        Ok(tables)
    }

    async fn create(&self, data: DiningTableCreate) -> StoreResult<DiningTable> {
        if self.tables.contains_key(&data.table_number) {
            return Err(StoreError::Duplicate(format!(
                "Table '{}' already exists",
                data.table_number
            )));
        }
        let table = DiningTable {
            id: None,
            table_number: data.table_number.clone(),
            name: data.name.unwrap_or_default(),
            ticket: None,
            is_active: true,
        };
        self.tables.insert(data.table_number, table.clone());
        Ok(table)
    }

    async fn set_ticket(
        &self,
        table_number: &str,
        ticket: Option<SessionTicket>,
    ) -> StoreResult<()> {
        match self.tables.get_mut(table_number) {
            Some(mut table) => {
                table.ticket = ticket;
                Ok(())
            }
            None => Err(StoreError::Backend(format!(
                "Table '{table_number}' not found"
            ))),
        }
    }

    async fn consume_ticket(&self, table_number: &str, expected_token: &str) -> StoreResult<bool> {
        match self.tables.get_mut(table_number) {
            Some(mut table) => {
                let matched = table
                    .ticket
                    .as_ref()
                    .is_some_and(|t| t.token == expected_token);
                if matched {
                    table.ticket = None;
                }
                Ok(matched)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl OrderStore for MemoryStore {
    async fn insert(&self, order: NewOrder) -> StoreResult<Order> {
        let record = Order {
            id: Some(RecordId::from_table_key("orders", Uuid::new_v4().to_string())),
            table_number: order.table_number,
            items: order.items,
            total_price: order.total_price,
            created_at: Utc::now(),
        };
        self.orders.lock().push(record.clone());
        Ok(record)
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn list_products(&self) -> StoreResult<Vec<Product>> {
        Ok(self.products.lock().clone())
    }
}
