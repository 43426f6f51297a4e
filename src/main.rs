//! FocusFlow Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod dates;
mod form;
mod models;
mod platform;
mod progress;
mod storage;
mod task_store;
mod view;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    tracing::info!("starting FocusFlow frontend");
    mount_to_body(App);
}
