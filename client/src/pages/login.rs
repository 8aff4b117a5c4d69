//! Login page: email + password sign-in against the backend session API.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use routes::ViewId;

use crate::app::href;
use crate::config::ApiConfig;
use crate::net::types::LoginRequest;

pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(LoginRequest {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

/// Dashboard a freshly signed-in user lands on.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn landing_view(is_admin: bool) -> ViewId {
    if is_admin {
        ViewId::AdminDashboard
    } else {
        ViewId::UserDashboard
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiConfig>();
    let navigate = leptos_router::hooks::use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let req = match validate_login_input(&email.get(), &password.get()) {
            Ok(req) => req,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&api, &req).await {
                    Ok(user) => {
                        let target = href(landing_view(user.is_admin()));
                        navigate(&target, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => info.set(e),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &navigate, req);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Quiz Master"</h1>
                <p class="auth-card__subtitle">"Sign in"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Login"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__switch">
                    "No account? "
                    <a href={href(ViewId::Register)}>"Register"</a>
                </p>
            </div>
        </div>
    }
}
