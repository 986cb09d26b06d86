//! Order API Handlers

use axum::{Json, extract::State, http::StatusCode};

use crate::core::ServerState;
use crate::db::models::Order;
use crate::session::PlaceOrderRequest;
use crate::utils::{AppResponse, AppResult, ok_with_message};

/// POST /api/orders - place an order against a session ticket
///
/// The whole validate/insert/invalidate sequence lives in the Session
/// Ticket Manager; this handler only translates the result to HTTP.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PlaceOrderRequest>,
) -> AppResult<(StatusCode, Json<AppResponse<Order>>)> {
    let order = state.tickets.place_order(payload).await?;
    Ok((
        StatusCode::CREATED,
        ok_with_message(order, "Order placed successfully"),
    ))
}
