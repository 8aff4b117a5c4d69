//! Shown for locations the route table does not know.

use leptos::prelude::*;
use routes::ViewId;

use crate::app::href;

#[component]
pub fn NotFoundPage(path: String) -> impl IntoView {
    let detail = (!path.is_empty()).then(|| {
        view! { <p class="page__hint">"Nothing lives at " <code>{path}</code></p> }
    });

    view! {
        <main class="page page--not-found">
            <h1>"Page not found"</h1>
            {detail}
            <a class="btn btn--primary" href={href(ViewId::Login)}>"Go to login"</a>
        </main>
    }
}
