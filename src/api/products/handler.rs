//! Product API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::models::Product;
use crate::db::repository::CatalogStore;
use crate::utils::{AppError, AppResult};

/// GET /api/products - list the menu
///
/// Stateless read-through to the catalog store; the ordering core never
/// recomputes prices from it.
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let products = state.catalog.list_products().await.map_err(AppError::from)?;
    Ok(Json(products))
}
