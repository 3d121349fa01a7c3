//! Login page: email + password form behind the auth gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns one `AuthGate` for the visit. An effect pushes every session
//! status into the gate and mirrors `current_view` into a signal; the markup
//! only ever renders that signal. Redirects happen inside the gate, never from
//! the submit handler.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::loading_screen::{LOGIN_LOADING_MESSAGE, LoadingScreen, REDIRECTING_MESSAGE};
use crate::config::GateConfig;
use crate::gate::{AuthGate, Credentials, GateView, Notice, NoticeKind, RedirectTarget, SessionOracle};
use crate::net::oracle::HttpSessionOracle;
use crate::state::session::SessionState;

/// Sign-up route. Served elsewhere; this crate only links to it.
pub const REGISTER_PATH: &str = "/register";

pub(crate) fn submit_label(busy: bool) -> &'static str {
    if busy { "Signing in..." } else { "Sign in" }
}

pub(crate) fn notice_class(kind: NoticeKind) -> String {
    format!("login-notice login-notice--{}", kind.as_str())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<GateConfig>();
    let session = expect_context::<RwSignal<SessionState>>();
    let query = use_query_map();
    let target = query.with_untracked(|q| RedirectTarget::from_query(|key: &str| q.get(key), &config));

    let navigate = use_navigate();
    // Deferred so the route change never runs inside a gate update.
    let navigator = move |path: &str| {
        let navigate = navigate.clone();
        let path = path.to_owned();
        leptos::task::spawn_local(async move { navigate(&path, NavigateOptions::default()) });
    };
    let gate = StoredValue::new_local(AuthGate::new(HttpSessionOracle::new(session), navigator, target));

    let view_state = RwSignal::new(GateView::Resolving);
    Effect::new(move || {
        let status = session.with(|s| s.status);
        gate.update_value(|g| g.observe(status));
        view_state.set(gate.with_value(AuthGate::current_view));
    });

    let alive = Arc::new(AtomicBool::new(true));
    let alive_cleanup = Arc::clone(&alive);
    on_cleanup(move || {
        alive_cleanup.store(false, Ordering::Relaxed);
        gate.try_update_value(AuthGate::release);
    });

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let inline_error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<Notice>);
    let submitting = RwSignal::new(false);

    let busy = move || {
        session.track();
        submitting.get() || gate.with_value(|g| g.oracle().busy())
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        inline_error.set(None);
        notice.set(None);
        let credentials = Credentials::new(email.get_untracked(), password.get_untracked());
        let pending = gate.with_value(|g| g.submit(credentials));
        submitting.set(true);
        let alive = Arc::clone(&alive);
        leptos::task::spawn_local(async move {
            let outcome = pending.await;
            if !alive.load(Ordering::Relaxed) {
                return;
            }
            inline_error.try_set(outcome.inline_error().map(str::to_owned));
            notice.try_set(Some(outcome.notice()));
            submitting.try_set(false);
        });
    };

    let form = move || {
        view! {
            <div class="login-card">
                <h2 class="login-card__title">"Sign in to your account"</h2>
                <p class="login-card__subtitle">
                    "Or " <a href=REGISTER_PATH class="login-link">"create a new account"</a>
                </p>
                <form class="login-form" on:submit=on_submit.clone()>
                    <label for="email" class="sr-only">"Email address"</label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        autocomplete="email"
                        required
                        class="login-input"
                        placeholder="Email address"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="password" class="sr-only">"Password"</label>
                    <input
                        id="password"
                        name="password"
                        type="password"
                        autocomplete="current-password"
                        required
                        class="login-input"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || inline_error.get().is_some()>
                        <p class="login-message login-message--error">
                            {move || inline_error.get().unwrap_or_default()}
                        </p>
                    </Show>
                    <button class="login-button" type="submit" disabled=busy>
                        {move || submit_label(busy())}
                    </button>
                    <a href="/" class="login-link">"← Back to Home"</a>
                </form>
            </div>
        }
    };

    view! {
        <div class="login-page">
            {move || {
                notice
                    .get()
                    .map(|n| view! { <div class=notice_class(n.kind) role="alert">{n.message}</div> })
            }}
            {move || match view_state.get() {
                GateView::Resolving => view! { <LoadingScreen message=LOGIN_LOADING_MESSAGE/> }.into_any(),
                GateView::RedirectingAway => view! { <LoadingScreen message=REDIRECTING_MESSAGE/> }.into_any(),
                GateView::Interactive => form().into_any(),
            }}
        </div>
    }
}
