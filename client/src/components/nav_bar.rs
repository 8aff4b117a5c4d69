//! Navigation bar for the user and admin areas.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use routes::{Area, ViewId, app_routes};

use crate::app::href;
use crate::config::ApiConfig;

/// Views linked from the bar of `area`: every view of that area that has a
/// parameterless path, in table order.
pub(crate) fn nav_views(area: Area) -> Vec<ViewId> {
    app_routes()
        .entries()
        .filter_map(|entry| match entry.target() {
            routes::Target::View(view) if entry.param_name().is_none() => Some(view),
            _ => None,
        })
        .filter(|view| view.area() == area)
        .collect()
}

#[component]
pub fn NavBar(area: Area, current: ViewId) -> impl IntoView {
    let api = expect_context::<ApiConfig>();
    let navigate = leptos_router::hooks::use_navigate();

    // The session is gone or unusable either way, so a failed logout still
    // leaves for the login view.
    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::logout(&api).await {
                    log::warn!("{e}");
                }
                navigate(&href(ViewId::Login), leptos_router::NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &navigate);
        }
    };

    let links = nav_views(area)
        .into_iter()
        .map(|view| {
            view! {
                <a
                    class="nav-bar__link"
                    class:nav-bar__link--active={view == current}
                    href={href(view)}
                >
                    {view.title()}
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"Quiz Master"</span>
            {links}
            <button class="nav-bar__link nav-bar__link--logout" on:click=on_logout>
                "Log out"
            </button>
        </nav>
    }
}
