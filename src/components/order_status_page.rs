//! Order Status Page Component
//!
//! The status tracker: one direct fetch, then live updates from the
//! per-order room. Push events for other orders are ignored; applied
//! events merge shallowly so the fetched item list survives.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::api::{self, ApiError};
use crate::config::AppConfig;
use crate::models::{apply_status_update, Order, OrderStatus};
use crate::money::format_rupiah;
use crate::notify::use_toaster;
use crate::realtime::{RealtimeClient, Room, ServerMessage};
use crate::components::{OrderProgress, StatusBadge};

#[component]
pub fn OrderStatusPage() -> impl IntoView {
    let cfg = expect_context::<AppConfig>();
    let toaster = use_toaster();
    let params = use_params_map();
    let navigate = use_navigate();

    let order_id = params.read_untracked().get("id").unwrap_or_default();

    let (order, set_order) = signal(None::<Order>);
    let (loading, set_loading) = signal(true);

    // One direct read before trusting any push
    {
        let api_base = cfg.api_base.clone();
        let order_id = order_id.clone();
        Effect::new(move |_| {
            let api_base = api_base.clone();
            let order_id = order_id.clone();
            spawn_local(async move {
                match api::fetch_order(&api_base, &order_id).await {
                    Ok(fetched) => {
                        let _ = set_order.try_set(Some(fetched));
                    }
                    Err(ApiError::NotFound) => {
                        // terminal: rendered as the not-found card below
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("[TRACKER] fetch: {}", e).into());
                        toaster.error("Gagal memuat pesanan");
                    }
                }
                let _ = set_loading.try_set(false);
            });
        });
    }

    // Join the per-order room; the handler double-checks the order id
    // because the channel is shared.
    let channel = StoredValue::new_local(None::<RealtimeClient>);
    {
        let expected_id = order_id.clone();
        match RealtimeClient::connect(&cfg.ws_url, Room::Order(order_id.clone()), move |message| {
            let ServerMessage::OrderStatusUpdated(update) = message else {
                return;
            };
            if update.order_id != expected_id {
                return;
            }
            let mut applied = false;
            let _ = set_order.try_update(|order| {
                if let Some(order) = order.as_mut() {
                    applied = apply_status_update(order, &update);
                }
            });
            if applied {
                toaster.success(format!(
                    "Status pesanan diperbarui: {}",
                    update.status.label()
                ));
            }
        }) {
            Ok(client) => channel.set_value(Some(client)),
            Err(e) => {
                web_sys::console::error_1(&format!("[TRACKER] channel: {}", e).into());
            }
        }
    }
    on_cleanup(move || channel.set_value(None));

    view! {
        <div class="order-status-page">
            <button
                class="back-btn"
                on:click={
                    let navigate = navigate.clone();
                    move |_| navigate("/", Default::default())
                }
            >
                "Kembali ke Beranda"
            </button>

            {move || {
                if loading.get() {
                    return view! { <p class="loading">"Memuat pesanan..."</p> }.into_any();
                }
                match order.get() {
                    None => view! { <NotFoundCard/> }.into_any(),
                    Some(order) => view! { <OrderDetail order=order/> }.into_any(),
                }
            }}
        </div>
    }
}

/// Terminal view for an unknown order id, with a single way home
#[component]
fn NotFoundCard() -> impl IntoView {
    let navigate = use_navigate();
    view! {
        <div class="not-found-card">
            <p>"Pesanan tidak ditemukan"</p>
            <button on:click=move |_| navigate("/", Default::default())>
                "Kembali ke Menu"
            </button>
        </div>
    }
}

#[component]
fn OrderDetail(order: Order) -> impl IntoView {
    view! {
        <div class="status-card">
            <h2>"Status Pesanan"</h2>
            <StatusBadge status=order.status/>
            <p class="order-id">"ID Pesanan: " <span class="mono">{order.id.clone()}</span></p>
            <p>"Nama: " {order.customer_name.clone()}</p>
            {order
                .table_number
                .clone()
                .map(|table| view! { <p>"Meja: " {table}</p> })}
            {(order.status != OrderStatus::Cancelled)
                .then(|| view! { <OrderProgress status=order.status/> })}
        </div>

        <div class="order-items-card">
            <h2>"Detail Pesanan"</h2>
            {order
                .items
                .iter()
                .map(|item| {
                    let subtotal = item.price * i64::from(item.quantity);
                    view! {
                        <div class="order-item">
                            <div>
                                <p class="name">{item.name.clone()}</p>
                                <p class="unit">
                                    {format!("{} x {}", item.quantity, format_rupiah(item.price))}
                                </p>
                            </div>
                            <p class="subtotal">{format_rupiah(subtotal)}</p>
                        </div>
                    }
                })
                .collect_view()}
            <div class="order-total">
                <span>"Total:"</span>
                <span class="amount">{format_rupiah(order.total)}</span>
            </div>
        </div>
    }
}
