//! Toolbase Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod dom;
mod loader;
mod logging;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = config::load();
    logging::init(config.debug);
    commands::http::configure(&config);
    tracing::info!(variant = ?config.variant, "starting");

    mount_to_body(move || view! { <App config=config /> });
}
