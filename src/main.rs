#![allow(warnings)]
//! Todo App Frontend Entry Point

mod models;
mod todos;
mod filter;
mod storage;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);

    mount_to_body(App);
}
