//! Toast Notifications
//!
//! Transient banners fed by the global success/error signals. The signals
//! clear themselves after a timeout, so a banner disappears on its own.

use leptos::*;

use crate::state::global::GlobalState;

/// Stack of active toast banners, pinned above the footer
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let success = state.success;
    let error = state.error;

    view! {
        <div class="fixed bottom-20 right-4 z-50 flex flex-col items-end gap-2">
            {move || success.get().map(|msg| banner("✓", "bg-green-600", msg))}
            {move || error.get().map(|msg| banner("✕", "bg-red-600", msg))}
        </div>
    }
}

/// A single toast banner
fn banner(icon: &'static str, bg: &'static str, message: String) -> impl IntoView {
    view! {
        <div class=format!(
            "flex items-center gap-3 {} text-white px-4 py-3 rounded-lg shadow-lg animate-slide-in",
            bg
        )>
            <span class="text-lg font-bold">{icon}</span>
            <span class="text-sm">{message}</span>
        </div>
    }
}
