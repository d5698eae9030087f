//! Admin Login Component
//!
//! Exchanges credentials for a bearer token and stores it. A browser
//! that already holds a token goes straight to the dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::{self, ApiError};
use crate::config::AppConfig;
use crate::notify::use_toaster;
use crate::session;

#[component]
pub fn AdminLogin() -> impl IntoView {
    let cfg = expect_context::<AppConfig>();
    let toaster = use_toaster();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    // Already logged in: skip the form
    {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            if session::is_authenticated() {
                navigate("/admin/dashboard", Default::default());
            }
        });
    }

    let handle_login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        set_submitting.set(true);

        let api_base = cfg.api_base.clone();
        let user = username.get();
        let pass = password.get();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&api_base, &user, &pass).await {
                Ok(response) => {
                    session::store_login(&response.token, &response.username);
                    toaster.success("Login berhasil!");
                    navigate("/admin/dashboard", Default::default());
                }
                Err(ApiError::Unauthorized) => {
                    toaster.error("Login gagal. Periksa username dan password Anda.");
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[LOGIN] {}", e).into());
                    toaster.error("Login gagal. Silakan coba lagi.");
                }
            }
            let _ = set_submitting.try_set(false);
        });
    };

    view! {
        <div class="admin-login-page">
            <div class="login-card">
                <h1>"Warkop Mamet"</h1>
                <p>"Admin Dashboard"</p>

                <form on:submit=handle_login>
                    <label for="username">"Username"</label>
                    <input
                        id="username"
                        type="text"
                        placeholder="Masukkan username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />

                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        placeholder="Masukkan password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />

                    <button type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Memproses..." } else { "Login" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
