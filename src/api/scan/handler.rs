//! QR Scan Handler
//!
//! The URL printed inside each table's QR code. Issues a fresh single-use
//! ticket for the table and bounces the customer's browser to the front-end
//! with the ordering credential in the query string.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /scan/table/{table_number} - issue a ticket and redirect
pub async fn scan(
    State(state): State<ServerState>,
    Path(table_number): Path<String>,
) -> AppResult<Redirect> {
    let ticket = state.tickets.issue(&table_number).await?;

    let url = format!(
        "{}/?table={}&code={}",
        state.config.frontend_url.trim_end_matches('/'),
        ticket.table_number,
        ticket.token
    );
    Ok(Redirect::to(&url))
}
