pub mod app;
pub mod app_shell;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod shared;

use shared::config::{init_config, load_config};
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    match load_config() {
        Ok(config) => init_config(config),
        Err(err) => log::error!("failed to load console configuration: {:#}", err),
    }

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
