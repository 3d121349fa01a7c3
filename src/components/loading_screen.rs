//! Full-page placeholder shown while a route waits on the session.

use leptos::prelude::*;

pub const LOGIN_LOADING_MESSAGE: &str = "Loading...";
pub const REDIRECTING_MESSAGE: &str = "Redirecting...";
pub const SERVICE_FORM_LOADING_MESSAGE: &str = "Loading service form...";

/// Centered spinner with a status line.
#[component]
pub fn LoadingScreen(message: &'static str) -> impl IntoView {
    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <div class="loading-screen__spinner"></div>
            <p class="loading-screen__message">{message}</p>
        </div>
    }
}
