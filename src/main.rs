//! Item Manager Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod lifecycle;
mod models;
mod state;

use app::App;
use config::ApiConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = ApiConfig::from_env();
    _ = console_log::init_with_level(config.log_level);
    log::info!("Items API at {}", config.collection_url());

    mount_to_body(move || view! { <App config=config /> });
}
