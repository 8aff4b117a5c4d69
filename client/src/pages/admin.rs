//! Administration pages.
//!
//! The five resource screens share `ResourcePage`; editing lives in the
//! backend admin API and is not driven from here.

use leptos::prelude::*;
use routes::{Area, ViewId};

use crate::app::href;
use crate::components::nav_bar::{NavBar, nav_views};
use crate::components::resource_list::ResourceList;
use crate::config::ApiConfig;
use crate::net::api::{Listing, fetch_chart_data};
use crate::net::types::SearchRequest;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let cards = nav_views(Area::Admin)
        .into_iter()
        .filter(|view| *view != ViewId::AdminDashboard)
        .map(|view| {
            view! {
                <a class="admin-card" href={href(view)}>
                    <span class="admin-card__title">{view.title()}</span>
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <NavBar area=Area::Admin current=ViewId::AdminDashboard/>
        <main class="page">
            <h1>"Admin dashboard"</h1>
            <div class="admin-grid">{cards}</div>
        </main>
    }
}

/// One resource listing under the admin bar.
#[component]
pub fn ResourcePage(view: ViewId, listing: Listing) -> impl IntoView {
    view! {
        <NavBar area=Area::Admin current=view/>
        <main class="page">
            <h1>{view.title()}</h1>
            <ResourceList listing/>
        </main>
    }
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let api = expect_context::<ApiConfig>();
    let term = RwSignal::new(String::new());
    let submitted = RwSignal::new(None::<String>);
    let results = LocalResource::new(move || {
        let api = api.clone();
        let term = submitted.get();
        async move {
            match term {
                Some(term) => crate::net::api::search(&api, &SearchRequest { term }).await.map(Some),
                None => Ok(None),
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = term.get().trim().to_owned();
        if !value.is_empty() {
            submitted.set(Some(value));
        }
    };

    view! {
        <NavBar area=Area::Admin current=ViewId::Search/>
        <main class="page">
            <h1>"Search"</h1>
            <form class="search-form" on:submit=on_submit>
                <input
                    class="search-form__input"
                    type="search"
                    placeholder="Users, subjects, chapters, quizzes, questions"
                    prop:value=move || term.get()
                    on:input=move |ev| term.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">"Search"</button>
            </form>
            <Suspense fallback=move || view! { <p>"Searching..."</p> }>
                {move || {
                    results
                        .get()
                        .map(|result| match result {
                            Ok(None) => {
                                view! { <p class="page__hint">"Enter a term to search."</p> }.into_any()
                            }
                            Ok(Some(groups)) if groups.is_empty() => {
                                view! { <p class="page__hint">"No matches."</p> }.into_any()
                            }
                            Ok(Some(groups)) => {
                                groups
                                    .into_iter()
                                    .map(|(listing, rows)| {
                                        view! {
                                            <section class="search-group">
                                                <h2>{listing.title()}</h2>
                                                <ul class="resource-list">
                                                    {rows
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
                                            </section>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }
                            Err(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </main>
    }
}

/// Average score per quiz, drawn as horizontal bars.
#[component]
pub fn ChartsPage() -> impl IntoView {
    let api = expect_context::<ApiConfig>();
    let data = LocalResource::new(move || {
        let api = api.clone();
        async move { fetch_chart_data(&api).await }
    });

    view! {
        <NavBar area=Area::Admin current=ViewId::Charts/>
        <main class="page">
            <h1>"Average scores"</h1>
            <Suspense fallback=move || view! { <p>"Loading charts..."</p> }>
                {move || {
                    data.get()
                        .map(|result| match result {
                            Ok(chart) => {
                                chart
                                    .bars()
                                    .into_iter()
                                    .map(|bar| {
                                        let style = format!("width: {:.1}%", bar.width_pct);
                                        view! {
                                            <div class="chart-row">
                                                <span class="chart-row__label">{bar.label}</span>
                                                <span class="chart-row__bar" style=style></span>
                                                <span class="chart-row__value">{format!("{:.2}", bar.score)}</span>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }
                            Err(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </main>
    }
}
