//! Aphasia Cards Frontend Entry Point

mod api;
mod app;
mod audio;
mod components;
mod config;
mod context;
mod error;
mod grouping;
mod keys;
mod media;
mod models;
mod navigation;
mod pages;
mod selection;
mod store;
mod text;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    if let Err(e) = console_log::init_with_level(config.log_level()) {
        web_sys::console::warn_1(&format!("[APP] Logger already set: {}", e).into());
    }
    log::info!("[APP] Starting, api_base={:?}", config.api_base);

    mount_to_body(move || view! { <App config=config /> });
}
