use leptos::*;
use wasm_bindgen::prelude::*;

mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod data;
pub mod error;
pub mod forms;
pub mod models;
pub mod nav;
pub mod pages;
pub mod routes;
pub mod state;
pub mod views;

/// WASM entry point - called when the WASM module loads
#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Starting DSP dashboard");

    mount_to_body(|| view! { <app::App /> });
}
