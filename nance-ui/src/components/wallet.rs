//! Wallet Connect Button
//!
//! Talks to the wallet extension's injected `window.ethereum` provider.
//! Connecting requests the account list and establishes a gateway session;
//! disconnecting deletes the session entry again.

use js_sys::{Array, Function, Object, Promise, Reflect};
use leptos::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::api;
use crate::format::shorten_address;
use crate::state::global::GlobalState;

/// Wallet connect/disconnect button
#[component]
pub fn ConnectButton() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_connect = state.clone();
    let connect = move |_| {
        let state = state_for_connect.clone();
        spawn_local(async move {
            match request_accounts().await {
                Ok(address) => {
                    if let Err(e) = api::init_session(&address).await {
                        state.show_error(&format!("Session init failed: {}", e));
                    }
                    state.wallet.set(Some(address));
                }
                Err(e) => state.show_error(&e),
            }
        });
    };

    let state_for_disconnect = state.clone();
    let disconnect = move |_| {
        let state = state_for_disconnect.clone();
        if let Some(address) = state.wallet.get() {
            spawn_local(async move {
                // Fire-and-forget; the store entry expires on its own anyway
                let _ = api::logout(&address).await;
            });
        }
        state.wallet.set(None);
    };

    let wallet = state.wallet;
    view! {
        {move || match wallet.get() {
            Some(address) => view! {
                <button
                    on:click=disconnect.clone()
                    class="ml-2 px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg
                           font-mono text-sm transition-colors"
                    title="Disconnect"
                >
                    {shorten_address(&address)}
                </button>
            }
            .into_view(),
            None => view! {
                <button
                    on:click=connect.clone()
                    class="ml-2 px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg
                           font-medium transition-colors"
                >
                    "Connect Wallet"
                </button>
            }
            .into_view(),
        }}
    }
}

/// Ask the injected provider for its accounts, returning the first one
async fn request_accounts() -> Result<String, String> {
    let window = web_sys::window().ok_or("No window")?;

    let ethereum = Reflect::get(&window, &JsValue::from_str("ethereum"))
        .map_err(|_| "No wallet extension found".to_string())?;
    if ethereum.is_undefined() || ethereum.is_null() {
        return Err("No wallet extension found".to_string());
    }

    let request: Function = Reflect::get(&ethereum, &JsValue::from_str("request"))
        .ok()
        .and_then(|v| v.dyn_into().ok())
        .ok_or("Wallet provider has no request method")?;

    let params = Object::new();
    Reflect::set(
        &params,
        &JsValue::from_str("method"),
        &JsValue::from_str("eth_requestAccounts"),
    )
    .map_err(|_| "Wallet request failed".to_string())?;

    let promise: Promise = request
        .call1(&ethereum, &params)
        .map_err(|_| "Wallet request failed".to_string())?
        .dyn_into()
        .map_err(|_| "Wallet request failed".to_string())?;

    let accounts = JsFuture::from(promise)
        .await
        .map_err(|_| "Wallet request rejected".to_string())?;

    let accounts: Array = accounts
        .dyn_into()
        .map_err(|_| "Unexpected wallet response".to_string())?;

    accounts
        .get(0)
        .as_string()
        .ok_or_else(|| "No account returned".to_string())
}
