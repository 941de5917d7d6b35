#![recursion_limit = "256"]

/// Release builds only log what a visitor's console should see.
fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use app::*;
    console_error_panic_hook::set_once();
    if let Err(error) = console_log::init_with_level(log_level()) {
        leptos::logging::warn!("Could not set up console logging: {error}");
    }
    leptos::mount::hydrate_body(App);
}
