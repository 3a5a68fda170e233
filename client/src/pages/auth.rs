//! Login page with a mock email + password form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Any well-formed submission signs the visitor in; there is no credential
//! check. On success the page routes to the dashboard.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::routes::AppRoute;

const MISSING_FIELDS: &str = "Enter both email and password.";
const INVALID_EMAIL: &str = "Enter a valid email address.";

/// Trim and check the login form fields.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    let password = password.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    if !email.contains('@') {
        return Err(INVALID_EMAIL);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let signed_in = RwSignal::new(false);

    Effect::new(move || {
        if signed_in.get() {
            signed_in.set(false);
            navigate(AppRoute::PROTECTED.path(), NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_login_input(&email.get(), &password.get()) {
            Ok(_) => {
                info.set(String::new());
                session.update(SessionState::login);
                signed_in.set(true);
            }
            Err(message) => info.set(message.to_owned()),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Smart Space"</h1>
                <p class="login-card__subtitle">"Sign in to view the city dashboard"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <a href=AppRoute::Home.path() class="login-card__back">
                    "Back to site"
                </a>
            </div>
        </div>
    }
}
