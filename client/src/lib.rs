//! # client
//!
//! Leptos + WASM frontend for the Quiz Master application.
//!
//! This crate contains the root component and routing outlet, the view
//! components bound to each route, shared navigation components, and the REST
//! helpers the views call. Path matching itself lives in the `routes` crate.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;

/// Browser entry point: install logging, read the API configuration the
/// server embedded in the shell, and hydrate the server-rendered view tree.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use app::App;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let api = config::read_from_document();
    log::info!("hydrating with api base {}", api.base_url);
    leptos::mount::hydrate_body(move || {
        view! { <App api=api.clone()/> }
    });
}
