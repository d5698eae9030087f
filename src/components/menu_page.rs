//! Menu Page Component
//!
//! Public catalog: filterable item grid with cart controls and the
//! floating checkout button.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::cart;
use crate::config::AppConfig;
use crate::models::{MenuCategory, MenuItem};
use crate::money::format_rupiah;
use crate::notify::use_toaster;
use crate::store::{
    store_add_to_cart, store_adjust_quantity, use_app_store, use_cart_repo, AppStateStoreFields,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CategoryFilter {
    All,
    Food,
    Drink,
}

impl CategoryFilter {
    fn matches(&self, category: MenuCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Food => category == MenuCategory::Food,
            CategoryFilter::Drink => category == MenuCategory::Drink,
        }
    }
}

#[component]
pub fn MenuPage() -> impl IntoView {
    let cfg = expect_context::<AppConfig>();
    let toaster = use_toaster();
    let store = use_app_store();

    let (menu_items, set_menu_items) = signal(Vec::<MenuItem>::new());
    let (loading, set_loading) = signal(true);
    let (filter, set_filter) = signal(CategoryFilter::All);

    // Load the public catalog on mount
    Effect::new(move |_| {
        let api_base = cfg.api_base.clone();
        spawn_local(async move {
            match api::fetch_public_menu(&api_base).await {
                Ok(items) => {
                    let _ = set_menu_items.try_set(items);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[MENU] fetch: {}", e).into());
                    toaster.error("Gagal memuat menu");
                }
            }
            let _ = set_loading.try_set(false);
        });
    });

    let filtered = move || {
        let current = filter.get();
        menu_items
            .get()
            .into_iter()
            .filter(|item| current.matches(item.category))
            .collect::<Vec<_>>()
    };

    let cart_lines = store.cart();
    let cart_units = move || cart::cart_count(&cart_lines.read());

    let filter_button = move |value: CategoryFilter, label: &'static str| {
        view! {
            <button
                class=move || {
                    if filter.get() == value { "filter-btn active" } else { "filter-btn" }
                }
                on:click=move |_| set_filter.set(value)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="menu-page">
            <header class="page-header">
                <h1>"Warkop Mamet"</h1>
                <p>"Kopi dan Makanan Tradisional Terbaik"</p>
            </header>

            <div class="filter-bar">
                {filter_button(CategoryFilter::All, "Semua")}
                {filter_button(CategoryFilter::Food, "Makanan")}
                {filter_button(CategoryFilter::Drink, "Minuman")}
            </div>

            {move || {
                if loading.get() {
                    view! { <p class="loading">"Memuat menu..."</p> }.into_any()
                } else {
                    view! {
                        <div class="menu-grid">
                            <For
                                each=filtered
                                key=|item| item.id.clone()
                                children=move |item| {
                                    view! { <MenuCard item=item/> }
                                }
                            />
                        </div>
                    }
                    .into_any()
                }
            }}

            {move || {
                let units = cart_units();
                (units > 0).then(|| {
                    view! {
                        <A href="/checkout" attr:class="floating-cart-btn">
                            {format!("Lihat Keranjang ({})", units)}
                        </A>
                    }
                })
            }}
        </div>
    }
}

/// One catalog card: add button, or +/− controls once the item is in
/// the cart.
#[component]
fn MenuCard(item: MenuItem) -> impl IntoView {
    let toaster = use_toaster();
    let store = use_app_store();
    let repo = use_cart_repo();

    let cart_lines = store.cart();
    let item_id = item.id.clone();
    let quantity = move || cart::line_quantity(&cart_lines.read(), &item_id);

    let add_item = item.clone();
    let add_repo = repo.clone();
    let inc_id = item.id.clone();
    let inc_repo = repo.clone();
    let dec_id = item.id.clone();
    let dec_repo = repo;

    view! {
        <div class="menu-card">
            <img src=item.image_url.clone() alt=item.name.clone()/>
            <span class="category-badge">{item.category.label()}</span>
            <h3>{item.name.clone()}</h3>
            <p class="description">{item.description.clone()}</p>
            <div class="card-footer">
                <span class="price">{format_rupiah(item.price)}</span>
                {move || {
                    if quantity() == 0 {
                        let item = add_item.clone();
                        let repo = add_repo.clone();
                        view! {
                            <button
                                class="add-btn"
                                on:click=move |_| {
                                    store_add_to_cart(&store, &repo, &item);
                                    toaster.success(format!(
                                        "{} ditambahkan ke keranjang",
                                        item.name
                                    ));
                                }
                            >
                                "Pesan"
                            </button>
                        }
                        .into_any()
                    } else {
                        let inc_id = inc_id.clone();
                        let inc_repo = inc_repo.clone();
                        let dec_id = dec_id.clone();
                        let dec_repo = dec_repo.clone();
                        view! {
                            <div class="quantity-controls">
                                <button on:click=move |_| {
                                    store_adjust_quantity(&store, &dec_repo, &dec_id, -1);
                                }>"−"</button>
                                <span class="quantity">{quantity()}</span>
                                <button on:click=move |_| {
                                    store_adjust_quantity(&store, &inc_repo, &inc_id, 1);
                                }>"+"</button>
                            </div>
                        }
                        .into_any()
                    }
                }}
            </div>
        </div>
    }
}
