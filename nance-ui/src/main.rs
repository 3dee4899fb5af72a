//! Nance Front-End
//!
//! DAO governance web client built with Leptos (WASM).
//!
//! # Features
//!
//! - Marketing/landing page
//! - Governance space listing with debounced search
//! - Wallet connect via the injected browser provider
//! - Settings sub-forms (gateway URL, contact form)
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the Nance gateway over HTTP; everything
//! stateful lives behind the gateway.

use leptos::*;

mod api;
mod app;
mod components;
mod format;
mod hooks;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
