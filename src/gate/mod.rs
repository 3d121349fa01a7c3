//! Login gate: decides what the login surface shows and when to leave it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page feeds every session status change into [`AuthGate::observe`] and
//! renders whatever [`AuthGate::current_view`] returns. The form is only
//! offered once the session is known to be anonymous, so an already
//! signed-in visitor never sees it flash before the redirect.
//!
//! TRANSITIONS
//! ===========
//! `Resolving -> Interactive` on `Anonymous`,
//! `Resolving | Interactive -> RedirectingAway` on `Authenticated`.
//! `RedirectingAway` is terminal and navigates exactly once.
//!
//! Submission never navigates. A successful login changes the session, the
//! page observes `Authenticated`, and that observation redirects.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
#[cfg(test)]
#[path = "stub_oracle_test.rs"]
pub(crate) mod stub_oracle;

mod oracle;
mod redirect;
mod submit;

use std::future::Future;
use std::pin::Pin;

pub use oracle::SessionOracle;
pub use redirect::RedirectTarget;
pub use submit::{Credentials, LOGIN_SUCCESS_MESSAGE, Notice, NoticeKind, SubmissionOutcome, SubmitError};

use crate::state::session::SessionStatus;

/// A submission in flight. Owns everything it needs, so it can be spawned on
/// the UI executor independently of the gate.
pub type PendingSubmission = Pin<Box<dyn Future<Output = SubmissionOutcome>>>;

/// What the login surface should render right now.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateView {
    /// Session not known yet; show a placeholder.
    #[default]
    Resolving,
    /// Anonymous visitor; the form may be used.
    Interactive,
    /// Authenticated; navigation to the redirect target has been requested.
    RedirectingAway,
}

/// Fire-and-forget navigation.
pub trait Navigator {
    fn navigate_to(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate_to(&self, path: &str) {
        self(path);
    }
}

/// Readiness and redirect state machine for one page visit.
pub struct AuthGate<O, N> {
    oracle: O,
    navigator: N,
    target: RedirectTarget,
    status: SessionStatus,
    redirected: bool,
    released: bool,
}

impl<O, N> AuthGate<O, N>
where
    O: SessionOracle,
    N: Navigator,
{
    pub fn new(oracle: O, navigator: N, target: RedirectTarget) -> Self {
        Self {
            oracle,
            navigator,
            target,
            status: SessionStatus::Unresolved,
            redirected: false,
            released: false,
        }
    }

    /// Apply the latest session status from the oracle.
    ///
    /// Repeating a status is a no-op. `Unresolved` after resolution and any
    /// status after the redirect are ignored.
    pub fn observe(&mut self, status: SessionStatus) {
        if self.released {
            leptos::logging::log!("auth gate released; ignoring {status:?}");
            return;
        }
        if self.redirected {
            return;
        }
        match status {
            SessionStatus::Unresolved => {
                if self.status != SessionStatus::Unresolved {
                    leptos::logging::warn!("auth gate: session went back to unresolved; ignoring");
                }
            }
            SessionStatus::Anonymous => self.status = SessionStatus::Anonymous,
            SessionStatus::Authenticated => {
                self.status = SessionStatus::Authenticated;
                self.redirected = true;
                leptos::logging::log!("auth gate: authenticated, redirecting to {}", self.target);
                self.navigator.navigate_to(self.target.as_str());
            }
        }
    }

    pub fn current_view(&self) -> GateView {
        if self.redirected {
            return GateView::RedirectingAway;
        }
        match self.status {
            SessionStatus::Unresolved => GateView::Resolving,
            SessionStatus::Anonymous => GateView::Interactive,
            // Unreachable without `redirected`; keep the form hidden anyway.
            SessionStatus::Authenticated => GateView::RedirectingAway,
        }
    }

    /// True until the first resolved status arrives.
    pub fn page_loading(&self) -> bool {
        self.status == SessionStatus::Unresolved
    }

    pub fn redirect_target(&self) -> &RedirectTarget {
        &self.target
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Stop reacting to the oracle. Called when the owning page goes away so
    /// late status pushes cannot navigate.
    pub fn release(&mut self) {
        self.released = true;
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Start one submission attempt.
    ///
    /// Validation runs now; invalid input resolves to a failure without
    /// touching the oracle. The returned future owns a handle to the oracle
    /// and nothing borrowed from the gate, so the caller may keep mutating
    /// the gate while the login is in flight.
    pub fn submit(&self, credentials: Credentials) -> PendingSubmission
    where
        O: Clone + 'static,
    {
        let checked = credentials.validate();
        let oracle = self.oracle.clone();
        Box::pin(async move {
            match checked {
                Ok(credentials) => submit::login_with(&oracle, credentials).await,
                Err(e) => e.into(),
            }
        })
    }
}
