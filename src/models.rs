//! Frontend Models
//!
//! Data structures matching backend entities and push events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Menu category (matches backend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MenuCategory {
    #[default]
    Food,
    Drink,
}

impl MenuCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuCategory::Food => "food",
            MenuCategory::Drink => "drink",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "drink" => MenuCategory::Drink,
            _ => MenuCategory::Food,
        }
    }

    /// Display label (Indonesian, as shown on menu cards)
    pub fn label(&self) -> &'static str {
        match self {
            MenuCategory::Food => "Makanan",
            MenuCategory::Drink => "Minuman",
        }
    }
}

/// Menu item (matches backend catalog entity)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub category: MenuCategory,
    /// Integer Rupiah amount
    pub price: i64,
    pub image_url: String,
    pub description: String,
    #[serde(default = "default_true")]
    pub available: bool,
}

fn default_true() -> bool {
    true
}

/// Create/update payload for a menu item (admin only)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItemPayload {
    pub name: String,
    pub category: MenuCategory,
    pub price: i64,
    pub image_url: String,
    pub description: String,
    pub available: bool,
}

/// One line of the locally persisted cart: a snapshot of the menu item
/// plus a quantity. Never a live reference to the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub price: i64,
    pub quantity: u32,
}

impl CartLine {
    pub fn from_item(item: &MenuItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            quantity: 1,
        }
    }
}

/// Order lifecycle status.
///
/// Entry state is always `Pending`; `Completed` and `Cancelled` are
/// terminal. Transition legality is enforced by the backend; the client
/// treats whatever value it receives as authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Accepted,
    Processing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// The four-step progression rendered by the status tracker.
    /// `Cancelled` sits outside it.
    pub const PROGRESSION: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Accepted,
        OrderStatus::Processing,
        OrderStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Accepted => "accepted",
            OrderStatus::Processing => "processing",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(OrderStatus::Pending),
            "accepted" => Some(OrderStatus::Accepted),
            "processing" => Some(OrderStatus::Processing),
            "completed" => Some(OrderStatus::Completed),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    /// Display label (Indonesian, as shown on status badges)
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Menunggu",
            OrderStatus::Accepted => "Diterima",
            OrderStatus::Processing => "Sedang Diproses",
            OrderStatus::Completed => "Selesai",
            OrderStatus::Cancelled => "Dibatalkan",
        }
    }

    /// CSS modifier for the status badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "status-badge pending",
            OrderStatus::Accepted => "status-badge accepted",
            OrderStatus::Processing => "status-badge processing",
            OrderStatus::Completed => "status-badge completed",
            OrderStatus::Cancelled => "status-badge cancelled",
        }
    }

    /// Position within [`Self::PROGRESSION`]; `None` for `Cancelled`.
    pub fn progress_index(&self) -> Option<usize> {
        Self::PROGRESSION.iter().position(|s| s == self)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    pub fn is_active(&self) -> bool {
        !self.is_terminal()
    }
}

/// Frozen line item inside an order (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub menu_item_id: String,
    pub name: String,
    pub price: i64,
    pub quantity: u32,
}

/// Order (matches backend, server-assigned id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub table_number: Option<String>,
    pub items: Vec<OrderItem>,
    pub total: i64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Order creation request built from the cart snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderCreate {
    pub customer_name: String,
    pub table_number: Option<String>,
    pub items: Vec<OrderItem>,
    pub total: i64,
}

/// Status-change push event carried over the realtime channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub order_id: String,
    pub status: OrderStatus,
    pub updated_at: DateTime<Utc>,
}

/// Merge a push event into a fetched order.
///
/// Shallow merge: only status and updated_at change, so the fetched item
/// list and total survive. Returns false (order untouched) when the event
/// is tagged with a different order id; the channel is shared, so
/// misrouted or stale messages must be ignored.
pub fn apply_status_update(order: &mut Order, update: &StatusUpdate) -> bool {
    if order.id != update.order_id {
        return false;
    }
    order.status = update.status;
    order.updated_at = update.updated_at;
    true
}

/// Daily analytics snapshot (matches backend)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Default)]
pub struct DailyAnalytics {
    pub total_orders: u32,
    pub total_revenue: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QrCodeResponse {
    pub qr_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_order(id: &str, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            customer_name: "Budi".to_string(),
            table_number: Some("Meja 5".to_string()),
            items: vec![OrderItem {
                menu_item_id: "a".to_string(),
                name: "Nasi Goreng".to_string(),
                price: 15000,
                quantity: 2,
            }],
            total: 30000,
            status,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_progression_order() {
        assert_eq!(OrderStatus::Pending.progress_index(), Some(0));
        assert_eq!(OrderStatus::Accepted.progress_index(), Some(1));
        assert_eq!(OrderStatus::Processing.progress_index(), Some(2));
        assert_eq!(OrderStatus::Completed.progress_index(), Some(3));
        assert_eq!(OrderStatus::Cancelled.progress_index(), None);
    }

    #[test]
    fn test_terminal_states() {
        assert!(OrderStatus::Completed.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(OrderStatus::Pending.is_active());
        assert!(OrderStatus::Processing.is_active());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(OrderStatus::Completed.label(), "Selesai");
        assert_eq!(OrderStatus::Pending.label(), "Menunggu");
        assert_eq!(OrderStatus::Cancelled.label(), "Dibatalkan");
    }

    #[test]
    fn test_status_names() {
        assert_eq!(OrderStatus::from_str("processing"), Some(OrderStatus::Processing));
        assert_eq!(OrderStatus::from_str("selesai"), None);
        assert_eq!(OrderStatus::Accepted.as_str(), "accepted");
    }

    #[test]
    fn test_apply_status_update_mismatched_id_ignored() {
        let mut order = make_order("order-1", OrderStatus::Processing);
        let before = order.clone();
        let update = StatusUpdate {
            order_id: "order-2".to_string(),
            status: OrderStatus::Completed,
            updated_at: Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap(),
        };
        assert!(!apply_status_update(&mut order, &update));
        assert_eq!(order, before);
    }

    #[test]
    fn test_apply_status_update_preserves_items_and_total() {
        let mut order = make_order("order-1", OrderStatus::Processing);
        let update = StatusUpdate {
            order_id: "order-1".to_string(),
            status: OrderStatus::Completed,
            updated_at: Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap(),
        };
        assert!(apply_status_update(&mut order, &update));
        assert_eq!(order.status, OrderStatus::Completed);
        assert_eq!(order.status.label(), "Selesai");
        assert_eq!(order.updated_at, update.updated_at);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.total, 30000);
    }

    #[test]
    fn test_order_decoding() {
        let json = r#"{
            "id": "abc-123",
            "customer_name": "Siti",
            "table_number": null,
            "items": [{"menu_item_id": "m1", "name": "Kopi Hitam", "price": 10000, "quantity": 1}],
            "total": 10000,
            "status": "pending",
            "created_at": "2025-01-01T09:00:00+00:00",
            "updated_at": "2025-01-01T09:00:00+00:00"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.table_number, None);
        assert_eq!(order.items[0].price, 10000);
    }
}
