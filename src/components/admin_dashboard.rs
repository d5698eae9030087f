//! Admin Dashboard Component
//!
//! Order monitor: order list, daily analytics, menu QR code, live
//! admin-room events, and the status-change command with duplicate
//! write suppression.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::api::{self, ApiError};
use crate::config::AppConfig;
use crate::inflight::InFlightSet;
use crate::models::{DailyAnalytics, Order, OrderStatus};
use crate::money::format_rupiah;
use crate::notify::use_toaster;
use crate::realtime::{RealtimeClient, Room, ServerMessage};
use crate::session;

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let cfg = expect_context::<AppConfig>();
    let toaster = use_toaster();
    let navigate = use_navigate();

    let (orders, set_orders) = signal(Vec::<Order>::new());
    let (analytics, set_analytics) = signal(DailyAnalytics::default());
    let (loading, set_loading) = signal(true);
    let (qr_code, set_qr_code) = signal(None::<String>);
    let updating = RwSignal::new(InFlightSet::default());

    // 401 anywhere on this page ends the session
    let expire = {
        let navigate = navigate.clone();
        move || {
            session::clear();
            toaster.error("Sesi Anda telah berakhir. Silakan login kembali.");
            navigate("/admin/login", Default::default());
        }
    };

    let load_orders = {
        let api_base = cfg.api_base.clone();
        let expire = expire.clone();
        move || {
            let api_base = api_base.clone();
            let expire = expire.clone();
            spawn_local(async move {
                let Some(token) = session::token() else {
                    expire();
                    return;
                };
                match api::fetch_orders(&api_base, &token).await {
                    Ok(list) => {
                        let _ = set_orders.try_set(list);
                    }
                    Err(ApiError::Unauthorized) => expire(),
                    Err(e) => {
                        web_sys::console::error_1(&format!("[ADMIN] orders: {}", e).into());
                        toaster.error("Gagal memuat pesanan");
                    }
                }
                let _ = set_loading.try_set(false);
            });
        }
    };

    let load_analytics = {
        let api_base = cfg.api_base.clone();
        let expire = expire.clone();
        move || {
            let api_base = api_base.clone();
            let expire = expire.clone();
            spawn_local(async move {
                let Some(token) = session::token() else {
                    expire();
                    return;
                };
                match api::fetch_daily_analytics(&api_base, &token).await {
                    Ok(snapshot) => {
                        let _ = set_analytics.try_set(snapshot);
                    }
                    Err(ApiError::Unauthorized) => expire(),
                    Err(e) => {
                        web_sys::console::error_1(&format!("[ADMIN] analytics: {}", e).into());
                    }
                }
            });
        }
    };

    // Initial load: orders, analytics, QR code
    {
        let load_orders = load_orders.clone();
        let load_analytics = load_analytics.clone();
        let api_base = cfg.api_base.clone();
        Effect::new(move |_| {
            load_orders();
            load_analytics();
            let api_base = api_base.clone();
            spawn_local(async move {
                let Some(token) = session::token() else {
                    return;
                };
                match api::fetch_qr_code(&api_base, &token).await {
                    Ok(response) => {
                        let _ = set_qr_code.try_set(Some(response.qr_code));
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("[ADMIN] qrcode: {}", e).into());
                    }
                }
            });
        });
    }

    // Admin room: new orders refresh everything, updates refresh the list
    let channel = StoredValue::new_local(None::<RealtimeClient>);
    {
        let load_orders = load_orders.clone();
        let load_analytics = load_analytics.clone();
        match RealtimeClient::connect(&cfg.ws_url, Room::Admin, move |message| match message {
            ServerMessage::NewOrder(_) => {
                load_orders();
                load_analytics();
                toaster.success("Pesanan baru masuk!");
            }
            ServerMessage::OrderUpdated(_) => load_orders(),
            ServerMessage::OrderStatusUpdated(_) => {}
        }) {
            Ok(client) => channel.set_value(Some(client)),
            Err(e) => {
                web_sys::console::error_1(&format!("[ADMIN] channel: {}", e).into());
            }
        }
    }
    on_cleanup(move || channel.set_value(None));

    // Status-change command. A second submission for an order with a
    // write already in flight is a no-op until the first resolves.
    let set_status = {
        let api_base = cfg.api_base.clone();
        let expire = expire.clone();
        let load_orders = load_orders.clone();
        let load_analytics = load_analytics.clone();
        move |order_id: String, status: OrderStatus| {
            let claimed = updating
                .try_update(|set| set.begin(&order_id))
                .unwrap_or(false);
            if !claimed {
                return;
            }

            let api_base = api_base.clone();
            let expire = expire.clone();
            let load_orders = load_orders.clone();
            let load_analytics = load_analytics.clone();
            spawn_local(async move {
                let Some(token) = session::token() else {
                    let _ = updating.try_update(|set| set.finish(&order_id));
                    expire();
                    return;
                };
                match api::update_order_status(&api_base, &token, &order_id, status).await {
                    Ok(_) => {
                        // optimistic update, reconciled by the fetch below
                        let _ = set_orders.try_update(|orders| {
                            if let Some(order) =
                                orders.iter_mut().find(|order| order.id == order_id)
                            {
                                order.status = status;
                                order.updated_at = Utc::now();
                            }
                        });
                        toaster.success(format!(
                            "Status pesanan diperbarui menjadi: {}",
                            status.label()
                        ));
                        load_orders();
                        load_analytics();
                    }
                    Err(ApiError::Unauthorized) => expire(),
                    Err(ApiError::NotFound) => {
                        // list is stale, refresh it
                        toaster.error("Pesanan tidak ditemukan");
                        load_orders();
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("[ADMIN] status: {}", e).into());
                        toaster.error("Gagal memperbarui status pesanan");
                    }
                }
                let _ = updating.try_update(|set| set.finish(&order_id));
            });
        }
    };

    let logout = {
        let navigate = navigate.clone();
        move |_| {
            session::clear();
            toaster.success("Logout berhasil");
            navigate("/admin/login", Default::default());
        }
    };

    let active_count =
        move || orders.with(|list| list.iter().filter(|o| o.status.is_active()).count());

    view! {
        <div class="admin-dashboard">
            <header class="admin-header">
                <div>
                    <h1>"Admin Dashboard"</h1>
                    <p>{match session::username() {
                        Some(name) => format!("Masuk sebagai {}", name),
                        None => "Warkop Mamet".to_string(),
                    }}</p>
                </div>
                <div class="admin-actions">
                    <A href="/admin/menu" attr:class="nav-btn">"Kelola Menu"</A>
                    <button class="logout-btn" on:click=logout>"Logout"</button>
                </div>
            </header>

            <div class="analytics-cards">
                <div class="analytics-card">
                    <p>"Total Pesanan Hari Ini"</p>
                    <p class="value">{move || analytics.get().total_orders}</p>
                </div>
                <div class="analytics-card">
                    <p>"Pendapatan Hari Ini"</p>
                    <p class="value">{move || format_rupiah(analytics.get().total_revenue)}</p>
                </div>
                <div class="analytics-card">
                    <p>"Pesanan Aktif"</p>
                    <p class="value">{active_count}</p>
                </div>
            </div>

            {move || {
                qr_code.get().map(|qr| view! {
                    <div class="qr-card">
                        <h2>"QR Code Menu"</h2>
                        <p>"Scan QR code ini untuk akses menu"</p>
                        <img src=qr alt="Menu QR Code"/>
                    </div>
                })
            }}

            <div class="orders-card">
                <h2>"Pesanan Real-time"</h2>
                {move || {
                    if loading.get() {
                        view! { <p class="loading">"Memuat pesanan..."</p> }.into_any()
                    } else if orders.with(|list| list.is_empty()) {
                        view! { <p class="empty">"Belum ada pesanan"</p> }.into_any()
                    } else {
                        let set_status = set_status.clone();
                        view! {
                            <table class="orders-table">
                                <thead>
                                    <tr>
                                        <th>"ID"</th>
                                        <th>"Pelanggan"</th>
                                        <th>"Meja"</th>
                                        <th>"Item"</th>
                                        <th>"Total"</th>
                                        <th>"Status"</th>
                                        <th>"Aksi"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || orders.get()
                                        key=|order| (order.id.clone(), order.status, order.updated_at)
                                        children=move |order| {
                                            let set_status = set_status.clone();
                                            view! { <OrderRow order=order set_status=set_status updating=updating/> }
                                        }
                                    />
                                </tbody>
                            </table>
                        }
                        .into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn OrderRow(
    order: Order,
    set_status: impl Fn(String, OrderStatus) + Clone + Send + Sync + 'static,
    updating: RwSignal<InFlightSet>,
) -> impl IntoView {
    let short_id = order.id.chars().take(8).collect::<String>();
    let row_id = order.id.clone();
    let busy = {
        let row_id = row_id.clone();
        move || updating.with(|set| set.contains(&row_id))
    };
    let busy_label = busy.clone();
    let current = order.status;

    view! {
        <tr>
            <td class="mono">{short_id}</td>
            <td>{order.customer_name.clone()}</td>
            <td>{order.table_number.clone().unwrap_or_else(|| "-".to_string())}</td>
            <td>
                {order
                    .items
                    .iter()
                    .map(|item| view! {
                        <div class="order-line">{format!("{} x{}", item.name, item.quantity)}</div>
                    })
                    .collect_view()}
            </td>
            <td class="amount">{format_rupiah(order.total)}</td>
            <td><span class=current.badge_class()>{current.label()}</span></td>
            <td>
                {move || busy_label().then(|| view! { <span class="updating">"Memperbarui..."</span> })}
                <select
                    prop:value=current.as_str()
                    disabled=busy
                    on:change=move |ev| {
                        if let Some(status) = OrderStatus::from_str(&event_target_value(&ev)) {
                            if status != current {
                                set_status(row_id.clone(), status);
                            }
                        }
                    }
                >
                    {OrderStatus::PROGRESSION
                        .iter()
                        .chain(std::iter::once(&OrderStatus::Cancelled))
                        .map(|status| view! {
                            <option value=status.as_str() selected=*status == current>
                                {status.label()}
                            </option>
                        })
                        .collect_view()}
                </select>
            </td>
        </tr>
    }
}
