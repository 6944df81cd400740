//! Plant Shop Frontend Entry Point

mod app;
mod cart;
mod catalog;
mod components;
mod config;
mod error;
mod filter;
mod models;
mod render;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    console_log::init_with_level(config.log_level).ok();
    log::info!("[APP] Starting against {}", config.api_base);

    mount_to_body(move || view! { <App config=config /> });
}
