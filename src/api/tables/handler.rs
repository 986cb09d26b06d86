//! Dining Table API Handlers
//!
//! Minimal administration surface so a fresh deployment can seed its
//! tables before printing QR codes.

use axum::{Json, extract::State, http::StatusCode};

use crate::core::ServerState;
use crate::db::models::{DiningTable, DiningTableCreate};
use crate::db::repository::TableStore;
use crate::utils::{AppError, AppResult};

/// GET /api/tables - list all active tables
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<DiningTable>>> {
    let tables = state.tables.list().await.map_err(AppError::from)?;
    Ok(Json(tables))
}

/// POST /api/tables - register a table
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DiningTableCreate>,
) -> AppResult<(StatusCode, Json<DiningTable>)> {
    if payload.table_number.trim().is_empty() {
        return Err(AppError::Validation("table_number is required".to_string()));
    }
    let table = state.tables.create(payload).await.map_err(AppError::from)?;
    Ok((StatusCode::CREATED, Json(table)))
}
