//! Cart Persistence
//!
//! Repository interface over the persisted cart snapshot. The browser's
//! local storage is the production medium; `MemoryCart` backs tests.
//!
//! Two tabs on the same cart are not coordinated: the last snapshot
//! written wins. The source behavior is kept as-is.

#[cfg(test)]
use std::sync::Mutex;

use thiserror::Error;

use crate::models::CartLine;

/// Local storage key holding the serialized cart
pub const CART_KEY: &str = "cart";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("cart snapshot could not be encoded: {0}")]
    Serialize(String),
}

/// Swappable persistence for the cart snapshot.
///
/// `load` tolerates a missing or corrupt snapshot by returning an empty
/// cart; a stale entry must never brick the menu page.
pub trait CartRepository: Send + Sync {
    fn load(&self) -> Vec<CartLine>;
    fn save(&self, snapshot: &[CartLine]) -> Result<(), StorageError>;
    fn clear(&self);
}

/// Cart repository backed by `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageCart;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl CartRepository for LocalStorageCart {
    fn load(&self) -> Vec<CartLine> {
        let Some(storage) = local_storage() else {
            return Vec::new();
        };
        storage
            .get_item(CART_KEY)
            .ok()
            .flatten()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn save(&self, snapshot: &[CartLine]) -> Result<(), StorageError> {
        let storage = local_storage().ok_or(StorageError::Unavailable)?;
        let raw = serde_json::to_string(snapshot)
            .map_err(|e| StorageError::Serialize(e.to_string()))?;
        storage
            .set_item(CART_KEY, &raw)
            .map_err(|_| StorageError::Unavailable)
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(CART_KEY);
        }
    }
}

/// In-memory cart repository for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryCart {
    snapshot: Mutex<Vec<CartLine>>,
}

#[cfg(test)]
impl CartRepository for MemoryCart {
    fn load(&self) -> Vec<CartLine> {
        self.snapshot.lock().expect("cart lock poisoned").clone()
    }

    fn save(&self, snapshot: &[CartLine]) -> Result<(), StorageError> {
        *self.snapshot.lock().expect("cart lock poisoned") = snapshot.to_vec();
        Ok(())
    }

    fn clear(&self) {
        self.snapshot.lock().expect("cart lock poisoned").clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_line(id: &str, quantity: u32) -> CartLine {
        CartLine {
            id: id.to_string(),
            name: format!("Item {}", id),
            price: 10000,
            quantity,
        }
    }

    #[test]
    fn test_memory_cart_snapshot_semantics() {
        let repo = MemoryCart::default();
        assert!(repo.load().is_empty());

        repo.save(&[make_line("a", 2)]).unwrap();
        // save replaces the whole snapshot, not merges
        repo.save(&[make_line("b", 1)]).unwrap();
        let loaded = repo.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "b");

        repo.clear();
        assert!(repo.load().is_empty());
    }
}
