//! The session oracle seam.

use async_trait::async_trait;

use crate::net::api::LoginError;
use crate::state::session::SessionStatus;

/// Source of truth for whether the visitor has a session.
///
/// The gate never reads `status` on its own; the page pushes every change
/// through [`super::AuthGate::observe`]. `busy` and `last_error` exist for the
/// presentation layer.
///
/// `?Send` because browser implementations hold reactive handles and run on
/// the single UI thread.
#[async_trait(?Send)]
pub trait SessionOracle {
    fn status(&self) -> SessionStatus;

    fn busy(&self) -> bool;

    fn last_error(&self) -> Option<String>;

    /// Establish a session. Completes exactly once.
    ///
    /// # Errors
    ///
    /// Returns a [`LoginError`] when the credentials are rejected or the
    /// request cannot be completed.
    async fn login(&self, identifier: &str, secret: &str) -> Result<(), LoginError>;
}
