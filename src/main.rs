//! Sticky Board Frontend Entry Point

mod models;
mod utils;
mod storage;
mod store;
mod board;
mod compose;
mod config;
mod context;
mod components;
mod app;

use app::App;
use config::BoardConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = BoardConfig::from_build_env();
    if let Err(e) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("logger already installed: {}", e).into());
    }
    log::info!("Sticky board starting, storage key {:?}", config.storage_key);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
