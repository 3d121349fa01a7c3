//! Booking page, reachable only with a session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Anonymous visitors are sent to the login page with `from=/book`, so the
//! login gate brings them straight back here after sign-in. The service form
//! itself is mounted by the host application inside `book-page__form`.

#[cfg(test)]
#[path = "book_test.rs"]
mod book_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::loading_screen::{LoadingScreen, SERVICE_FORM_LOADING_MESSAGE};
use crate::config::GateConfig;
use crate::state::session::{SessionState, SessionStatus};
use crate::util::auth::{install_unauth_redirect, login_href};

pub const BOOK_PATH: &str = "/book";

pub(crate) fn greeting(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => format!("Welcome back, {}.", name.trim()),
        _ => "Welcome back.".to_owned(),
    }
}

#[component]
pub fn BookPage() -> impl IntoView {
    let config = expect_context::<GateConfig>();
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, login_href(&config, BOOK_PATH), use_navigate());

    let signed_in = move || session.with(|s| s.status == SessionStatus::Authenticated);

    view! {
        <Show
            when=signed_in
            fallback=|| view! { <LoadingScreen message=SERVICE_FORM_LOADING_MESSAGE/> }
        >
            <section class="book-page">
                <h1 class="book-page__title">"Book a service"</h1>
                <p class="book-page__greeting">
                    {move || session.with(|s| greeting(s.user.as_ref().map(|u| u.name.as_str())))}
                </p>
                <div class="book-page__form" id="service-form"></div>
            </section>
        </Show>
    }
}
