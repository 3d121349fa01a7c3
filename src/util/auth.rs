//! Shared auth UI helpers for protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages send anonymous visitors to the login page and tell it where
//! they came from, so the login gate can send them back after sign-in.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::{GateConfig, LOGIN_PATH, is_local_path};
use crate::state::session::{SessionState, SessionStatus};

/// True once the session has resolved to anonymous.
///
/// An unresolved session never redirects; the page keeps its loading state
/// until the probe answers.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    state.status == SessionStatus::Anonymous
}

/// Login page URL carrying `from` as the return path, e.g.
/// `/login?from=%2Fbook`.
pub fn login_href(config: &GateConfig, from: &str) -> String {
    if !is_local_path(from) || from == LOGIN_PATH {
        return LOGIN_PATH.to_owned();
    }
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair(&config.redirect_param, from)
        .finish();
    format!("{LOGIN_PATH}?{query}")
}

/// Redirect to the login page whenever the session resolves to anonymous.
///
/// Navigates at most once per installation.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, login_href: String, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move |redirected: Option<bool>| {
        if redirected == Some(true) {
            return true;
        }
        if !session.with(should_redirect_unauth) {
            return false;
        }
        navigate(&login_href, NavigateOptions::default());
        true
    });
}
