//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The cart is
//! the one piece of state shared across pages; every mutation persists
//! the full snapshot through the injected repository before returning.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::cart;
use crate::models::{CartLine, MenuItem};
use crate::storage::CartRepository;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Cart lines for the active browser session
    pub cart: Vec<CartLine>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Injected cart persistence, provided via context
#[derive(Clone)]
pub struct CartRepo(pub Arc<dyn CartRepository>);

/// Get the cart repository from context
pub fn use_cart_repo() -> CartRepo {
    expect_context::<CartRepo>()
}

fn persist(repo: &CartRepo, lines: &[CartLine]) {
    if let Err(e) = repo.0.save(lines) {
        web_sys::console::warn_1(&format!("[CART] snapshot not saved: {}", e).into());
    }
}

// ========================
// Store Helper Functions
// ========================

/// Replace the cart with the persisted snapshot (app start)
pub fn store_load_cart(store: &AppStore, repo: &CartRepo) {
    *store.cart().write() = repo.0.load();
}

/// Add one unit of a menu item to the cart
pub fn store_add_to_cart(store: &AppStore, repo: &CartRepo, item: &MenuItem) {
    let cart_field = store.cart();
    let mut lines = cart_field.write();
    cart::add_line(&mut lines, item);
    persist(repo, &lines);
}

/// Adjust a line quantity by delta; the line disappears at zero
pub fn store_adjust_quantity(store: &AppStore, repo: &CartRepo, item_id: &str, delta: i32) {
    let cart_field = store.cart();
    let mut lines = cart_field.write();
    cart::adjust_quantity(&mut lines, item_id, delta);
    persist(repo, &lines);
}

/// Remove a line regardless of quantity
pub fn store_remove_from_cart(store: &AppStore, repo: &CartRepo, item_id: &str) {
    let cart_field = store.cart();
    let mut lines = cart_field.write();
    cart::remove_line(&mut lines, item_id);
    persist(repo, &lines);
}

/// Empty the cart (successful submission or explicit clear)
pub fn store_clear_cart(store: &AppStore, repo: &CartRepo) {
    store.cart().write().clear();
    repo.0.clear();
}
