#![allow(warnings)]
//! Intent Market Frontend Entry Point

mod models;
mod mock;
mod filter;
mod actions;
mod schedule;
mod context;
mod store;
mod components;
mod pages;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
