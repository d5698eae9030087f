//! Order Progress Components
//!
//! Status badge plus the four-step progress indicator. The indicator is
//! purely presentational: it highlights every step up to the current
//! status's position in the fixed progression. `Dibatalkan` never joins
//! the progression; it renders as its own terminal badge and the steps
//! dim out.

use leptos::prelude::*;

use crate::models::OrderStatus;

/// Colored badge with the Indonesian status label
#[component]
pub fn StatusBadge(status: OrderStatus) -> impl IntoView {
    view! {
        <span class=status.badge_class()>{status.label()}</span>
    }
}

/// Four-step progress indicator over pending → completed
#[component]
pub fn OrderProgress(status: OrderStatus) -> impl IntoView {
    let reached = status.progress_index();

    view! {
        <div class=move || {
            if reached.is_none() { "progress-steps cancelled" } else { "progress-steps" }
        }>
            {OrderStatus::PROGRESSION
                .iter()
                .enumerate()
                .map(|(index, step)| {
                    let active = reached.is_some_and(|r| index <= r);
                    view! {
                        <div class=if active { "progress-step active" } else { "progress-step" }>
                            <div class="progress-dot">{index + 1}</div>
                            <p class="progress-label">{step.label()}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
