//! Toast Host Component
//!
//! Renders whatever the injected toast queue holds; clicking a toast
//! dismisses it early.

use leptos::prelude::*;

use crate::notify::use_toaster;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast-host">
            <For
                each=move || toaster.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast.level.css_class()
                            on:click=move |_| toaster.dismiss(id)
                        >
                            {toast.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
