//! Read-only list of rows from one admin listing endpoint.

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::net::api::{Listing, fetch_listing};

/// Fetches `listing` on mount and renders one line per row.
#[component]
pub fn ResourceList(listing: Listing) -> impl IntoView {
    let api = expect_context::<ApiConfig>();
    let rows = LocalResource::new(move || {
        let api = api.clone();
        async move { fetch_listing(&api, listing).await }
    });

    view! {
        <Suspense fallback=move || view! { <p>"Loading..."</p> }>
            {move || {
                rows.get()
                    .map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! { <p class="resource-list__empty">"Nothing here yet."</p> }
                                .into_any()
                        }
                        Ok(list) => {
                            view! {
                                <ul class="resource-list">
                                    {list
                                        .into_iter()
                                        .map(|row| {
                                            view! {
                                                <li class="resource-list__row">
                                                    <span class="resource-list__id">{row.id}</span>
                                                    <span class="resource-list__label">{row.label}</span>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                                .into_any()
                        }
                        Err(message) => {
                            view! { <p class="resource-list__error">{message}</p> }.into_any()
                        }
                    })
            }}
        </Suspense>
    }
}
