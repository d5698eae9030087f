mod api;
mod app;
mod cart;
mod components;
mod config;
mod inflight;
mod models;
mod money;
mod notify;
mod realtime;
mod session;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
