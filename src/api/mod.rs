//! API routing
//!
//! # Structure
//!
//! - [`scan`] - QR-code entry point: issue a ticket and redirect
//! - [`orders`] - order placement (ticket consumption)
//! - [`products`] - catalog listing
//! - [`tables`] - table administration
//! - [`health`] - health check

pub mod health;
pub mod orders;
pub mod products;
pub mod scan;
pub mod tables;

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .merge(health::router())
        .merge(scan::router())
        .merge(orders::router())
        .merge(products::router())
        .merge(tables::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn welcome() -> Json<Value> {
    Json(json!({ "message": "Welcome to the Kedai ordering API" }))
}
