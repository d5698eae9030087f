//! Menu Endpoints
//!
//! Public catalog plus the admin CRUD surface.

use crate::models::{MenuItem, MenuItemPayload};

use super::{delete, get_json, send_json, ApiError};

/// GET /menu: available items only, no auth
pub async fn fetch_public_menu(base: &str) -> Result<Vec<MenuItem>, ApiError> {
    get_json(&format!("{}/menu", base), None).await
}

/// GET /menu/all: every item, including unavailable ones
pub async fn fetch_all_menu(base: &str, token: &str) -> Result<Vec<MenuItem>, ApiError> {
    get_json(&format!("{}/menu/all", base), Some(token)).await
}

/// POST /menu
pub async fn create_menu_item(
    base: &str,
    token: &str,
    payload: &MenuItemPayload,
) -> Result<MenuItem, ApiError> {
    send_json("POST", &format!("{}/menu", base), Some(token), payload).await
}

/// PUT /menu/{id}
pub async fn update_menu_item(
    base: &str,
    token: &str,
    item_id: &str,
    payload: &MenuItemPayload,
) -> Result<MenuItem, ApiError> {
    send_json(
        "PUT",
        &format!("{}/menu/{}", base, item_id),
        Some(token),
        payload,
    )
    .await
}

/// DELETE /menu/{id}
pub async fn delete_menu_item(base: &str, token: &str, item_id: &str) -> Result<(), ApiError> {
    delete(&format!("{}/menu/{}", base, item_id), Some(token)).await
}
