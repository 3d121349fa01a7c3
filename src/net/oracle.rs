//! Browser session oracle backed by the REST auth endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns one `RwSignal<SessionState>`. The startup probe resolves it once,
//! the login gate writes to it through [`HttpSessionOracle::login`], and every
//! page reads `status` from it.
//!
//! Writes go through `try_update`, so a response that lands after the owning
//! reactive scope has been disposed is dropped instead of panicking.

use async_trait::async_trait;
use leptos::prelude::*;

use super::api::{self, LoginError};
use crate::gate::SessionOracle;
use crate::state::session::{SessionState, SessionStatus};

#[derive(Clone, Copy)]
pub struct HttpSessionOracle {
    session: RwSignal<SessionState>,
}

impl HttpSessionOracle {
    pub fn new(session: RwSignal<SessionState>) -> Self {
        Self { session }
    }
}

#[async_trait(?Send)]
impl SessionOracle for HttpSessionOracle {
    fn status(&self) -> SessionStatus {
        self.session.with_untracked(|s| s.status)
    }

    fn busy(&self) -> bool {
        self.session.with_untracked(|s| s.busy)
    }

    fn last_error(&self) -> Option<String> {
        self.session.with_untracked(|s| s.last_error.clone())
    }

    async fn login(&self, identifier: &str, secret: &str) -> Result<(), LoginError> {
        self.session.try_update(SessionState::begin_login);
        let result = api::login(identifier, secret).await;
        let outcome = result.as_ref().map(|_| ()).map_err(LoginError::clone);
        if self.session.try_update(|s| s.apply_login_result(result)).is_none() {
            leptos::logging::log!("login finished after the session scope was disposed");
        }
        outcome
    }
}

/// Ask the server once whether the visitor already has a session.
///
/// Outside the browser the status stays `Unresolved`, so server-rendered
/// pages show their loading state and the client takes over on hydration.
pub fn install_session_probe(session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = api::fetch_current_user().await;
        if session.try_update(|s| s.resolve(user)).is_none() {
            leptos::logging::log!("session probe finished after the app was disposed");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _unused = session;
    }
}
