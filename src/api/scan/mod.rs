//! QR scan API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/scan/table/{table_number}", get(handler::scan))
}
