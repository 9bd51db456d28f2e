pub mod app;
pub mod domain;
pub mod layout;
pub mod shared;

use leptos::prelude::*;
use shared::config::{load_config, AppConfig};
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate; narrowed once config is known
    _ = console_log::init_with_level(log::Level::Trace);
    console_error_panic_hook::set_once();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load config, using defaults: {:#}", e);
            AppConfig::default()
        }
    };
    log::set_max_level(config.logging.log_level().to_level_filter());

    leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
