pub mod app;
pub mod domain;
pub mod shared;

use app::App;
use leptos::prelude::*;
use shared::config::{self, AppConfig};
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let loaded = config::load_config();
    let level = loaded
        .as_ref()
        .map(|c| c.logging.log_level())
        .unwrap_or(log::Level::Info);

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("config.toml is invalid, using defaults: {}", e);
        AppConfig::default()
    });

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
