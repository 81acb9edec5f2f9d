//! Forza AI Site
//!
//! Marketing pages, AI chat and code explainer built with Leptos (WASM).
//!
//! # Architecture
//!
//! Client-side rendered Leptos application compiled to WebAssembly. It
//! talks to the Forza server over HTTP; the server relays prompts to the
//! completion API.

use leptos::*;

mod api;
mod app;
mod clipboard;
mod components;
mod format;
mod pages;
mod state;

fn main() {
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
