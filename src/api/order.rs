//! Order Endpoints
//!
//! Creation and lookup are public; the list and status writes are
//! admin-only.

use serde::Serialize;

use crate::models::{Order, OrderCreate, OrderStatus};

use super::{get_json, send_json, ApiError};

#[derive(Serialize)]
struct StatusPayload {
    status: OrderStatus,
}

/// POST /orders: create an order from the cart snapshot
pub async fn create_order(base: &str, order: &OrderCreate) -> Result<Order, ApiError> {
    send_json("POST", &format!("{}/orders", base), None, order).await
}

/// GET /orders/{id}: fetch one order, no auth
pub async fn fetch_order(base: &str, order_id: &str) -> Result<Order, ApiError> {
    get_json(&format!("{}/orders/{}", base, order_id), None).await
}

/// GET /orders: full order list
pub async fn fetch_orders(base: &str, token: &str) -> Result<Vec<Order>, ApiError> {
    get_json(&format!("{}/orders", base), Some(token)).await
}

/// PUT /orders/{id}/status: issue a status transition
pub async fn update_order_status(
    base: &str,
    token: &str,
    order_id: &str,
    status: OrderStatus,
) -> Result<Order, ApiError> {
    send_json(
        "PUT",
        &format!("{}/orders/{}/status", base, order_id),
        Some(token),
        &StatusPayload { status },
    )
    .await
}
