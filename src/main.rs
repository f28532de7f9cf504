#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod app;
#[path = "lib/mod.rs"]
mod app_lib;
mod components;
mod features;
mod routes;

#[cfg(target_arch = "wasm32")]
pub fn main() {
    use leptos::prelude::mount_to_body;

    mount_to_body(crate::app::App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
