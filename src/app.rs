//! Application Shell
//!
//! Wires up context (config, toast service, cart store and its
//! persistence backend) and the route table. Admin pages sit behind
//! the auth gate.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{
    AdminDashboard, AdminLogin, AdminMenu, CheckoutPage, MenuPage, OrderStatusPage, RequireAdmin,
    ToastHost,
};
use crate::config::AppConfig;
use crate::notify::Toaster;
use crate::storage::LocalStorageCart;
use crate::store::{store_load_cart, AppState, CartRepo};

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppConfig::from_window());
    provide_context(Toaster::new());

    let store = Store::new(AppState::default());
    let repo = CartRepo(Arc::new(LocalStorageCart));
    store_load_cart(&store, &repo);
    provide_context(store);
    provide_context(repo);

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p class="not-found">"Halaman tidak ditemukan"</p> }>
                    <Route path=path!("/") view=MenuPage/>
                    <Route path=path!("/checkout") view=CheckoutPage/>
                    <Route path=path!("/order/:id") view=OrderStatusPage/>
                    <Route path=path!("/admin/login") view=AdminLogin/>
                    <Route
                        path=path!("/admin/dashboard")
                        view=|| view! {
                            <RequireAdmin>
                                <AdminDashboard/>
                            </RequireAdmin>
                        }
                    />
                    <Route
                        path=path!("/admin/menu")
                        view=|| view! {
                            <RequireAdmin>
                                <AdminMenu/>
                            </RequireAdmin>
                        }
                    />
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
