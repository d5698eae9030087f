//! Admin Menu Component
//!
//! CRUD over the catalog: the full item list (unavailable items
//! included), a dialog form for create/edit, and deletion behind an
//! inline confirm gate.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::api::{self, ApiError};
use crate::components::DeleteConfirmButton;
use crate::config::AppConfig;
use crate::models::{MenuCategory, MenuItem, MenuItemPayload};
use crate::money::format_rupiah;
use crate::notify::use_toaster;
use crate::session;

#[component]
pub fn AdminMenu() -> impl IntoView {
    let cfg = expect_context::<AppConfig>();
    let toaster = use_toaster();
    let navigate = use_navigate();

    let (menu_items, set_menu_items) = signal(Vec::<MenuItem>::new());
    let (loading, set_loading) = signal(true);
    // Some(None) = creating, Some(Some(id)) = editing that item
    let (dialog, set_dialog) = signal(None::<Option<String>>);

    let (form_name, set_form_name) = signal(String::new());
    let (form_category, set_form_category) = signal(MenuCategory::Food);
    let (form_price, set_form_price) = signal(String::new());
    let (form_image_url, set_form_image_url) = signal(String::new());
    let (form_description, set_form_description) = signal(String::new());
    let (form_available, set_form_available) = signal(true);

    let expire = {
        let navigate = navigate.clone();
        move || {
            session::clear();
            toaster.error("Sesi Anda telah berakhir. Silakan login kembali.");
            navigate("/admin/login", Default::default());
        }
    };

    let load_items = {
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
                match api::fetch_all_menu(&api_base, &token).await {
                    Ok(items) => {
                        let _ = set_menu_items.try_set(items);
                    }
                    Err(ApiError::Unauthorized) => expire(),
                    Err(e) => {
                        web_sys::console::error_1(&format!("[MENU-ADMIN] fetch: {}", e).into());
                        toaster.error("Gagal memuat menu");
                    }
                }
                let _ = set_loading.try_set(false);
            });
        }
    };

    {
        let load_items = load_items.clone();
        Effect::new(move |_| load_items());
    }

    let open_dialog = move |item: Option<MenuItem>| {
        match item {
            Some(item) => {
                set_form_name.set(item.name);
                set_form_category.set(item.category);
                set_form_price.set(item.price.to_string());
                set_form_image_url.set(item.image_url);
                set_form_description.set(item.description);
                set_form_available.set(item.available);
                set_dialog.set(Some(Some(item.id)));
            }
            None => {
                set_form_name.set(String::new());
                set_form_category.set(MenuCategory::Food);
                set_form_price.set(String::new());
                set_form_image_url.set(String::new());
                set_form_description.set(String::new());
                set_form_available.set(true);
                set_dialog.set(Some(None));
            }
        }
    };

    let submit_form = {
        let api_base = cfg.api_base.clone();
        let expire = expire.clone();
        let load_items = load_items.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let Ok(price) = form_price.get().trim().parse::<i64>() else {
                toaster.error("Harga tidak valid");
                return;
            };
            if price < 0 {
                toaster.error("Harga tidak valid");
                return;
            }
            let payload = MenuItemPayload {
                name: form_name.get().trim().to_string(),
                category: form_category.get(),
                price,
                image_url: form_image_url.get().trim().to_string(),
                description: form_description.get(),
                available: form_available.get(),
            };
            if payload.name.is_empty() {
                toaster.error("Mohon masukkan nama menu");
                return;
            }
            let editing = dialog.get().flatten();

            let api_base = api_base.clone();
            let expire = expire.clone();
            let load_items = load_items.clone();
            spawn_local(async move {
                let Some(token) = session::token() else {
                    expire();
                    return;
                };
                let result = match &editing {
                    Some(item_id) => {
                        api::update_menu_item(&api_base, &token, item_id, &payload).await
                    }
                    None => api::create_menu_item(&api_base, &token, &payload).await,
                };
                match result {
                    Ok(_) => {
                        toaster.success(if editing.is_some() {
                            "Menu berhasil diperbarui"
                        } else {
                            "Menu berhasil ditambahkan"
                        });
                        let _ = set_dialog.try_set(None);
                        load_items();
                    }
                    Err(ApiError::Unauthorized) => expire(),
                    Err(e) => {
                        web_sys::console::error_1(&format!("[MENU-ADMIN] save: {}", e).into());
                        toaster.error("Gagal menyimpan menu");
                    }
                }
            });
        }
    };

    let delete_item = {
        let api_base = cfg.api_base.clone();
        let expire = expire.clone();
        let load_items = load_items.clone();
        move |item_id: String| {
            let api_base = api_base.clone();
            let expire = expire.clone();
            let load_items = load_items.clone();
            spawn_local(async move {
                let Some(token) = session::token() else {
                    expire();
                    return;
                };
                match api::delete_menu_item(&api_base, &token, &item_id).await {
                    Ok(()) => {
                        toaster.success("Menu berhasil dihapus");
                        load_items();
                    }
                    Err(ApiError::Unauthorized) => expire(),
                    Err(ApiError::NotFound) => {
                        // already gone, just resync the list
                        load_items();
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("[MENU-ADMIN] delete: {}", e).into());
                        toaster.error("Gagal menghapus menu");
                    }
                }
            });
        }
    };

    view! {
        <div class="admin-menu-page">
            <header class="admin-header">
                <A href="/admin/dashboard" attr:class="nav-btn">"Kembali ke Dashboard"</A>
                <h1>"Kelola Menu"</h1>
                <button class="add-btn" on:click=move |_| open_dialog(None)>
                    "Tambah Menu"
                </button>
            </header>

            {move || {
                if loading.get() {
                    view! { <p class="loading">"Memuat menu..."</p> }.into_any()
                } else {
                    let delete_item = delete_item.clone();
                    view! {
                        <div class="menu-admin-grid">
                            <For
                                each=move || menu_items.get()
                                key=|item| item.clone()
                                children=move |item| {
                                    let edit_item = item.clone();
                                    let delete_id = item.id.clone();
                                    let delete_item = delete_item.clone();
                                    view! {
                                        <div class=if item.available {
                                            "menu-admin-card"
                                        } else {
                                            "menu-admin-card unavailable"
                                        }>
                                            <img src=item.image_url.clone() alt=item.name.clone()/>
                                            <h3>{item.name.clone()}</h3>
                                            <p class="category">{item.category.label()}</p>
                                            <p class="price">{format_rupiah(item.price)}</p>
                                            {(!item.available)
                                                .then(|| view! { <span class="badge">"Tidak Tersedia"</span> })}
                                            <div class="card-actions">
                                                <button on:click=move |_| open_dialog(Some(edit_item.clone()))>
                                                    "Ubah"
                                                </button>
                                                <DeleteConfirmButton
                                                    button_class="delete-btn"
                                                    on_confirm=Callback::new(move |_| {
                                                        delete_item(delete_id.clone())
                                                    })
                                                />
                                            </div>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    }
                    .into_any()
                }
            }}

            {move || {
                dialog.get().map(|editing| {
                    let submit_form = submit_form.clone();
                    view! {
                        <div class="dialog-overlay">
                            <div class="dialog">
                                <h2>{if editing.is_some() { "Ubah Menu" } else { "Tambah Menu" }}</h2>
                                <form on:submit=submit_form>
                                    <label for="menu-name">"Nama"</label>
                                    <input
                                        id="menu-name"
                                        type="text"
                                        prop:value=move || form_name.get()
                                        on:input=move |ev| set_form_name.set(event_target_value(&ev))
                                    />

                                    <label for="menu-category">"Kategori"</label>
                                    <select
                                        id="menu-category"
                                        prop:value=move || form_category.get().as_str()
                                        on:change=move |ev| {
                                            set_form_category
                                                .set(MenuCategory::from_str(&event_target_value(&ev)))
                                        }
                                    >
                                        <option value="food">"Makanan"</option>
                                        <option value="drink">"Minuman"</option>
                                    </select>

                                    <label for="menu-price">"Harga (Rp)"</label>
                                    <input
                                        id="menu-price"
                                        type="number"
                                        min="0"
                                        prop:value=move || form_price.get()
                                        on:input=move |ev| set_form_price.set(event_target_value(&ev))
                                    />

                                    <label for="menu-image">"URL Gambar"</label>
                                    <input
                                        id="menu-image"
                                        type="text"
                                        prop:value=move || form_image_url.get()
                                        on:input=move |ev| set_form_image_url.set(event_target_value(&ev))
                                    />

                                    <label for="menu-description">"Deskripsi"</label>
                                    <textarea
                                        id="menu-description"
                                        prop:value=move || form_description.get()
                                        on:input=move |ev| set_form_description.set(event_target_value(&ev))
                                    ></textarea>

                                    <label class="checkbox-label">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || form_available.get()
                                            on:change=move |ev| {
                                                set_form_available.set(event_target_checked(&ev))
                                            }
                                        />
                                        "Tersedia"
                                    </label>

                                    <div class="dialog-actions">
                                        <button type="submit">"Simpan"</button>
                                        <button type="button" on:click=move |_| set_dialog.set(None)>
                                            "Batal"
                                        </button>
                                    </div>
                                </form>
                            </div>
                        </div>
                    }
                })
            }}
        </div>
    }
}
