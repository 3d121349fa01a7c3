//! REST API helpers for the session endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so a failed session
//! probe or login degrades the page without crashing hydration. `LoginError`
//! keeps the transport detail for logs; the login form never shows it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;
#[cfg(feature = "hydrate")]
use super::types::LoginRequest;

pub const CURRENT_USER_ENDPOINT: &str = "/api/auth/me";
pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

/// Why a login request did not produce a session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("credentials rejected")]
    Rejected,
    #[error("login request failed: {0}")]
    Status(u16),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected login response: {0}")]
    Decode(String),
}

#[cfg(any(test, feature = "hydrate"))]
fn login_error_for_status(status: u16) -> LoginError {
    match status {
        401 | 403 => LoginError::Rejected,
        other => LoginError::Status(other),
    }
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::get(CURRENT_USER_ENDPOINT).send().await {
            Ok(resp) => resp,
            Err(e) => {
                leptos::logging::warn!("session probe failed: {e}");
                return None;
            }
        };
        if !resp.ok() {
            return None;
        }
        match resp.json::<User>().await {
            Ok(user) => Some(user),
            Err(e) => {
                leptos::logging::warn!("session probe returned an unreadable user: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Exchange an email and password for a session via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns [`LoginError::Rejected`] on 401/403, [`LoginError::Status`] for any
/// other non-OK status, and transport/decode variants when the request or the
/// response body fails.
pub async fn login(email: &str, password: &str) -> Result<User, LoginError> {
    #[cfg(feature = "hydrate")]
    {
        let body = LoginRequest { email, password };
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&body)
            .map_err(|e| LoginError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| LoginError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(login_error_for_status(resp.status()));
        }
        resp.json::<User>()
            .await
            .map_err(|e| LoginError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _unused = (email, password);
        Err(LoginError::Transport("not available on server".to_owned()))
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post(LOGOUT_ENDPOINT).send().await {
            leptos::logging::warn!("logout request failed: {e}");
        }
    }
}
