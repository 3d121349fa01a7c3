//! Session state for the current browser visitor.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the observable side of the session oracle. Route guards and the
//! login gate read `status`; only the oracle and the startup probe write it.
//! Once `status` leaves `Unresolved` it never returns there.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::LoginError;
use crate::net::types::User;

/// What the oracle currently knows about the visitor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// The startup probe has not answered yet.
    #[default]
    Unresolved,
    /// Resolved, no session.
    Anonymous,
    /// Resolved, session present.
    Authenticated,
}

/// Authentication state tracking the current user, status and login progress.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub status: SessionStatus,
    pub user: Option<User>,
    /// True while a login request is in flight.
    pub busy: bool,
    /// Internal detail of the most recent login failure.
    pub last_error: Option<String>,
}

impl SessionState {
    /// Settle the startup probe. Ignored once the status has been resolved.
    pub fn resolve(&mut self, user: Option<User>) {
        if self.status != SessionStatus::Unresolved {
            return;
        }
        self.status = if user.is_some() { SessionStatus::Authenticated } else { SessionStatus::Anonymous };
        self.user = user;
    }

    pub fn begin_login(&mut self) {
        self.busy = true;
        self.last_error = None;
    }

    /// Fold a login response into the session.
    ///
    /// A failure never touches `status`: a slow rejected attempt must not undo
    /// a session that was established after it was sent.
    pub fn apply_login_result(&mut self, result: Result<User, LoginError>) {
        self.busy = false;
        match result {
            Ok(user) => {
                self.status = SessionStatus::Authenticated;
                self.user = Some(user);
                self.last_error = None;
            }
            Err(e) => self.last_error = Some(e.to_string()),
        }
    }

    pub fn sign_out(&mut self) {
        self.status = SessionStatus::Anonymous;
        self.user = None;
        self.busy = false;
    }
}
