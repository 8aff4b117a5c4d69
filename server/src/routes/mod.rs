//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client uses history-mode URLs, so every application path must return
//! the server-rendered shell. Leptos owns all of them through the client's
//! catch-all route; this module only adds static assets and `/healthz`.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use client::app::{App, shell};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// `[workspace.metadata.leptos]` (or the `LEPTOS_*` overrides) is
    /// missing or malformed.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
}

/// Leptos SSR app + static assets + health check.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn app(config: &ServerConfig) -> Result<Router, RouterError> {
    let conf = get_configuration(None).map_err(|e| RouterError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let api = config.api.clone();

    let routes = generate_route_list({
        let api = api.clone();
        move || view! { <App api=api.clone()/> }
    });

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone(), api.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
