#![allow(dead_code)]
//! Packing-list Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod logging;
mod models;
mod planner;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Debug);
    mount_to_body(App);
}
