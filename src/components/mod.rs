//! View Components
//!
//! One file per page or reusable widget.

mod admin_dashboard;
mod admin_login;
mod admin_menu;
mod checkout_page;
mod delete_confirm_button;
mod menu_page;
mod order_progress;
mod order_status_page;
mod require_admin;
mod toast_host;

pub use admin_dashboard::AdminDashboard;
pub use admin_login::AdminLogin;
pub use admin_menu::AdminMenu;
pub use checkout_page::CheckoutPage;
pub use delete_confirm_button::DeleteConfirmButton;
pub use menu_page::MenuPage;
pub use order_progress::{OrderProgress, StatusBadge};
pub use order_status_page::OrderStatusPage;
pub use require_admin::RequireAdmin;
pub use toast_host::ToastHost;
