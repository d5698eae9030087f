//! Checkout Page Component
//!
//! Cart summary plus the customer form. Validation (name, non-empty
//! cart) happens locally; only a valid request reaches the network. On
//! success the cart is cleared and the user lands on the status tracker
//! for the new order. On failure the cart is left untouched.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::cart::{self, build_order_request, OrderFormError};
use crate::config::AppConfig;
use crate::money::format_rupiah;
use crate::notify::use_toaster;
use crate::store::{
    store_clear_cart, store_remove_from_cart, use_app_store, use_cart_repo, AppStateStoreFields,
};

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let cfg = expect_context::<AppConfig>();
    let toaster = use_toaster();
    let store = use_app_store();
    let repo = use_cart_repo();
    let navigate = use_navigate();

    let (customer_name, set_customer_name) = signal(String::new());
    let (table_number, set_table_number) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let cart_lines = store.cart();

    // An empty cart has nothing to check out; go back to the menu.
    // Checked once on entry, not reactively: submission clears the cart
    // right before navigating away.
    {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            if cart_lines.read_untracked().is_empty() {
                navigate("/", Default::default());
            }
        });
    }

    let total = move || cart::cart_total(&cart_lines.read());

    let submit_order = {
        let repo = repo.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            if submitting.get() {
                return;
            }

            let request = match build_order_request(
                &customer_name.get(),
                &table_number.get(),
                &cart_lines.read(),
            ) {
                Ok(request) => request,
                Err(OrderFormError::EmptyName) => {
                    toaster.error("Mohon masukkan nama Anda");
                    return;
                }
                Err(OrderFormError::EmptyCart) => {
                    toaster.error("Keranjang Anda kosong");
                    return;
                }
            };

            set_submitting.set(true);
            let api_base = cfg.api_base.clone();
            let repo = repo.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                match api::create_order(&api_base, &request).await {
                    Ok(order) => {
                        store_clear_cart(&store, &repo);
                        toaster.success("Pesanan berhasil dibuat!");
                        navigate(&format!("/order/{}", order.id), Default::default());
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("[CHECKOUT] submit: {}", e).into());
                        toaster.error("Gagal membuat pesanan. Silakan coba lagi.");
                        let _ = set_submitting.try_set(false);
                    }
                }
            });
        }
    };

    view! {
        <div class="checkout-page">
            <button
                class="back-btn"
                on:click={
                    let navigate = use_navigate();
                    move |_| navigate("/", Default::default())
                }
            >
                "Kembali ke Menu"
            </button>

            <section class="cart-summary">
                <h2>"Ringkasan Pesanan"</h2>
                <For
                    each=move || cart_lines.get()
                    key=|line| line.id.clone()
                    children=move |line| {
                        let repo = use_cart_repo();
                        let line_id = line.id.clone();
                        let subtotal = line.price * i64::from(line.quantity);
                        view! {
                            <div class="cart-line">
                                <div>
                                    <h4>{line.name.clone()}</h4>
                                    <p>{format!("{} x {}", line.quantity, format_rupiah(line.price))}</p>
                                    <p class="subtotal">{format_rupiah(subtotal)}</p>
                                </div>
                                <button
                                    class="remove-btn"
                                    on:click=move |_| {
                                        store_remove_from_cart(&store, &repo, &line_id);
                                        toaster.success("Item dihapus dari keranjang");
                                    }
                                >
                                    "Hapus"
                                </button>
                            </div>
                        }
                    }
                />
                <div class="cart-total">
                    <span>"Total:"</span>
                    <span class="amount">{move || format_rupiah(total())}</span>
                </div>
            </section>

            <section class="customer-form">
                <h2>"Informasi Pelanggan"</h2>
                <form on:submit=submit_order>
                    <label for="customer-name">"Nama *"</label>
                    <input
                        id="customer-name"
                        type="text"
                        placeholder="Masukkan nama Anda"
                        prop:value=move || customer_name.get()
                        on:input=move |ev| set_customer_name.set(event_target_value(&ev))
                    />

                    <label for="table-number">"Nomor Meja (Opsional)"</label>
                    <input
                        id="table-number"
                        type="text"
                        placeholder="Contoh: Meja 5"
                        prop:value=move || table_number.get()
                        on:input=move |ev| set_table_number.set(event_target_value(&ev))
                    />

                    <button type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Memproses..." } else { "Kirim Pesanan" }}
                    </button>
                </form>
            </section>
        </div>
    }
}
