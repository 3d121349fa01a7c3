//! Landing page and default post-login destination.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::config::GateConfig;
use crate::net::api;
use crate::pages::book::BOOK_PATH;
use crate::state::session::{SessionState, SessionStatus};
use crate::util::auth::login_href;

/// Which account control the header shows for a session status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AccountAction {
    SignIn,
    SignOut,
}

pub(crate) fn account_action(status: SessionStatus) -> Option<AccountAction> {
    match status {
        SessionStatus::Unresolved => None,
        SessionStatus::Anonymous => Some(AccountAction::SignIn),
        SessionStatus::Authenticated => Some(AccountAction::SignOut),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<GateConfig>();
    let session = expect_context::<RwSignal<SessionState>>();
    let sign_in_href = login_href(&config, &config.default_redirect);

    let on_sign_out = move |_| {
        leptos::task::spawn_local(async move {
            api::logout().await;
            session.try_update(SessionState::sign_out);
        });
    };

    view! {
        <main class="home-page">
            <header class="home-page__header">
                <h1>"Book your next appointment"</h1>
                {move || match account_action(session.with(|s| s.status)) {
                    Some(AccountAction::SignIn) => {
                        view! { <a class="home-page__account" href=sign_in_href.clone()>"Sign in"</a> }
                            .into_any()
                    }
                    Some(AccountAction::SignOut) => {
                        view! {
                            <button class="home-page__account" on:click=on_sign_out>"Sign out"</button>
                        }
                            .into_any()
                    }
                    None => ().into_any(),
                }}
            </header>
            <a class="home-page__cta" href=BOOK_PATH>"Book a service"</a>
        </main>
    }
}
