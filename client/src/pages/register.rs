//! Registration page for new quiz takers.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use routes::ViewId;

use crate::app::href;
use crate::config::ApiConfig;
use crate::net::types::RegisterRequest;

const MIN_PASSWORD_LEN: usize = 6;

pub(crate) fn validate_register_input(
    email: &str,
    full_name: &str,
    password: &str,
    confirm: &str,
) -> Result<RegisterRequest, &'static str> {
    let email = email.trim();
    let full_name = full_name.trim();
    if email.is_empty() || full_name.is_empty() || password.is_empty() {
        return Err("Fill in every field.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(RegisterRequest {
        email: email.to_owned(),
        full_name: full_name.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<ApiConfig>();
    let navigate = leptos_router::hooks::use_navigate();
    let email = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let req = match validate_register_input(
            &email.get(),
            &full_name.get(),
            &password.get(),
            &confirm.get(),
        ) {
            Ok(req) => req,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&api, &req).await {
                    Ok(()) => navigate(&href(ViewId::Login), leptos_router::NavigateOptions::default()),
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

    let field = move |kind: &'static str, placeholder: &'static str, signal: RwSignal<String>| {
        view! {
            <input
                class="auth-input"
                type=kind
                placeholder=placeholder
                prop:value=move || signal.get()
                on:input=move |ev| signal.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Quiz Master"</h1>
                <p class="auth-card__subtitle">"Create an account"</p>
                <form class="auth-form" on:submit=on_submit>
                    {field("email", "you@example.com", email)}
                    {field("text", "Full name", full_name)}
                    {field("password", "Password", password)}
                    {field("password", "Confirm password", confirm)}
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__switch">
                    "Already registered? "
                    <a href={href(ViewId::Login)}>"Login"</a>
                </p>
            </div>
        </div>
    }
}
