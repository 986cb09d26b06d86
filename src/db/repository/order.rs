//! Order Repository

use async_trait::async_trait;
use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, OrderStore, StoreError, StoreResult};
use crate::db::models::{NewOrder, Order};

const TABLE: &str = "orders";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl OrderStore for OrderRepository {
    async fn insert(&self, order: NewOrder) -> StoreResult<Order> {
        let record = Order {
            id: None,
            table_number: order.table_number,
            items: order.items,
            total_price: order.total_price,
            created_at: Utc::now(),
        };

        let created: Option<Order> = self.base.db().create(TABLE).content(record).await?;
        created.ok_or_else(|| StoreError::Backend("Order insert returned no record".to_string()))
    }
}
