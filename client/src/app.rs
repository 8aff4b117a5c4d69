//! Root application component, routing outlet, and view dispatch.
//!
//! ROUTING
//! =======
//! Leptos only sees a catch-all route. Every location change is resolved by
//! the `routes` table, and the result is mounted here through an exhaustive
//! `match` on `ViewId`, so the table stays the single source of truth for
//! which paths exist.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use http::StatusCode;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
};
use routes::{LOGIN_PATH, Params, QUIZ_ID_PARAM, Resolved, RouteError, ViewId, app_routes};

use crate::config::{ApiConfig, META_BASE_URL, META_WITH_CREDENTIALS};
use crate::net::api::Listing;
use crate::pages::{
    admin::{AdminDashboardPage, ChartsPage, ResourcePage, SearchPage},
    login::LoginPage,
    not_found::NotFoundPage,
    register::RegisterPage,
    user::{QuizAttemptPage, QuizHistoryPage, UserDashboardPage},
};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The API configuration travels to the browser in `<meta>` tags so the
/// hydrating client builds the same `ApiConfig` the server rendered with.
pub fn shell(options: LeptosOptions, api: ApiConfig) -> impl IntoView {
    let with_credentials = api.credentials_flag();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=META_BASE_URL content={api.base_url.clone()}/>
                <meta name=META_WITH_CREDENTIALS content=with_credentials/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App api/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API configuration to every view and hands all locations to
/// [`RouteOutlet`].
#[component]
pub fn App(api: ApiConfig) -> impl IntoView {
    provide_meta_context();
    provide_context(api);

    view! {
        <Stylesheet id="leptos" href="/pkg/quiz-master.css"/>
        <Title text="Quiz Master"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage path=String::new()/> }>
                <Route path=StaticSegment("") view=RouteOutlet/>
                <Route path=WildcardSegment("any") view=RouteOutlet/>
            </Routes>
        </Router>
    }
}

/// Resolve the current location and mount the bound view.
#[component]
fn RouteOutlet() -> impl IntoView {
    let location = use_location();
    move || {
        let path = location.pathname.get();
        let outcome = app_routes().resolve(&path);
        #[cfg(feature = "ssr")]
        {
            if let Some(status) = outcome_status(&outcome) {
                if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
                    response.set_status(status);
                }
            }
        }
        match outcome {
            Ok(Resolved::View { view, params }) => mount_view(view, &params),
            Ok(Resolved::Redirect(to)) => view! { <Redirect path=to/> }.into_any(),
            Err(err) => {
                #[cfg(feature = "hydrate")]
                log::warn!("{err}");
                #[cfg(not(feature = "hydrate"))]
                let _ = err;
                view! { <NotFoundPage path/> }.into_any()
            }
        }
    }
}

/// Status the server sends for a resolution outcome; `None` keeps the
/// default. Redirects get theirs from `<Redirect>`.
pub(crate) fn outcome_status(outcome: &Result<Resolved, RouteError>) -> Option<StatusCode> {
    match outcome {
        Ok(_) => None,
        Err(_) => Some(StatusCode::NOT_FOUND),
    }
}

/// Instantiate the component bound to `view`.
///
/// Params reach the component only when its entry forwards them.
fn mount_view(view: ViewId, params: &Params) -> AnyView {
    let props = forwarded_params(view, params);
    match view {
        ViewId::Login => view! { <LoginPage/> }.into_any(),
        ViewId::Register => view! { <RegisterPage/> }.into_any(),
        ViewId::UserDashboard => view! { <UserDashboardPage/> }.into_any(),
        ViewId::QuizAttempt => {
            let quiz_id = props.get(QUIZ_ID_PARAM).cloned().unwrap_or_default();
            view! { <QuizAttemptPage quiz_id/> }.into_any()
        }
        ViewId::QuizHistory => view! { <QuizHistoryPage/> }.into_any(),
        ViewId::AdminDashboard => view! { <AdminDashboardPage/> }.into_any(),
        ViewId::ManageSubjects => resource_page(view, Listing::Subjects),
        ViewId::ManageChapters => resource_page(view, Listing::Chapters),
        ViewId::ManageQuizzes => resource_page(view, Listing::Quizzes),
        ViewId::ManageQuestions => resource_page(view, Listing::Questions),
        ViewId::ManageUsers => resource_page(view, Listing::Users),
        ViewId::Search => view! { <SearchPage/> }.into_any(),
        ViewId::Charts => view! { <ChartsPage/> }.into_any(),
    }
}

fn resource_page(view: ViewId, listing: Listing) -> AnyView {
    view! { <ResourcePage view listing/> }.into_any()
}

/// Params the view receives as inputs; empty unless its entry forwards them.
pub(crate) fn forwarded_params(view: ViewId, params: &Params) -> Params {
    match app_routes().entry_for(view) {
        Some(entry) if entry.props_from_params() => params.clone(),
        _ => Params::new(),
    }
}

/// Link target for a parameterless view.
///
/// Views with a dynamic segment have no plain link; build theirs with
/// `build_path`. Asking for one anyway logs the error and links to the login
/// view.
pub fn href(view: ViewId) -> String {
    app_routes().path_of(view).unwrap_or_else(|err| {
        #[cfg(feature = "hydrate")]
        log::warn!("no plain link for {view}: {err}");
        #[cfg(not(feature = "hydrate"))]
        let _ = err;
        LOGIN_PATH.to_owned()
    })
}
