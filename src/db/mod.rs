//! Database Module
//!
//! Embedded SurrealDB (RocksDB) connection and schema definitions.

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

const NAMESPACE: &str = "kedai";
const DATABASE: &str = "kedai";

/// Open the embedded database and apply schema definitions
pub async fn connect(db_path: &str) -> Result<Surreal<Db>, AppError> {
    let db = Surreal::new::<RocksDb>(db_path)
        .await
        .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

    db.use_ns(NAMESPACE)
        .use_db(DATABASE)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    define_schema(&db).await?;
    tracing::info!("Database ready (embedded SurrealDB at {db_path})");

    Ok(db)
}

async fn define_schema(db: &Surreal<Db>) -> Result<(), AppError> {
    // table_number is the lookup key for ticket operations; keep it unique
    db.query(
        "
        DEFINE TABLE IF NOT EXISTS dining_table SCHEMALESS;
        DEFINE INDEX IF NOT EXISTS dining_table_number ON dining_table FIELDS table_number UNIQUE;
        DEFINE TABLE IF NOT EXISTS orders SCHEMALESS;
        DEFINE TABLE IF NOT EXISTS product SCHEMALESS;
        ",
    )
    .await
    .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;
    Ok(())
}
