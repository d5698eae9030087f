//! Admin Session Guard Component
//!
//! Pure presence check on the stored token: no token, no admin view.
//! Expiry is only discovered when a protected call answers 401.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::session;

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    view! {
        <Show
            when=session::is_authenticated
            fallback=|| view! { <Redirect path="/admin/login"/> }
        >
            {children()}
        </Show>
    }
}
