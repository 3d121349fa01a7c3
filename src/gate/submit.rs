//! Credential submission and the outcomes the login form reacts to.
//!
//! ERROR HANDLING
//! ==============
//! Two failure kinds reach the visitor: a local validation failure, which
//! never contacts the oracle, and one generic authentication failure that
//! covers both rejected credentials and transport errors. The oracle's own
//! error detail is logged here and dropped.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::fmt;

use super::oracle::SessionOracle;

pub const LOGIN_SUCCESS_MESSAGE: &str = "Successfully logged in!";

/// Email/password pair for one submission attempt.
///
/// Consumed by the submission; `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    identifier: String,
    secret: String,
}

impl Credentials {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self { identifier: identifier.into(), secret: secret.into() }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Require both fields.
    ///
    /// An identifier of only whitespace counts as missing. Both values are
    /// handed on exactly as typed.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Validation`] if either field is empty.
    pub fn validate(self) -> Result<Self, SubmitError> {
        if self.identifier.trim().is_empty() || self.secret.is_empty() {
            return Err(SubmitError::Validation);
        }
        Ok(self)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// User-facing failure kinds. `Display` is the exact text shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Email and password are required")]
    Validation,
    #[error("Login failed. Please check your credentials.")]
    Authentication,
}

/// Result of one submission attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    Failure(String),
}

impl From<SubmitError> for SubmissionOutcome {
    fn from(err: SubmitError) -> Self {
        Self::Failure(err.to_string())
    }
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Message for the inline error slot under the form.
    pub fn inline_error(&self) -> Option<&str> {
        match self {
            Self::Success => None,
            Self::Failure(message) => Some(message),
        }
    }

    /// Ephemeral notification for the toast collaborator.
    pub fn notice(&self) -> Notice {
        match self {
            Self::Success => Notice { kind: NoticeKind::Success, message: LOGIN_SUCCESS_MESSAGE.to_owned() },
            Self::Failure(message) => Notice { kind: NoticeKind::Error, message: message.clone() },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Hand validated credentials to the oracle and collapse its answer.
pub(super) async fn login_with<O>(oracle: &O, credentials: Credentials) -> SubmissionOutcome
where
    O: SessionOracle + ?Sized,
{
    let Credentials { identifier, secret } = credentials;
    match oracle.login(&identifier, &secret).await {
        Ok(()) => SubmissionOutcome::Success,
        Err(e) => {
            leptos::logging::warn!("login failed: {e}");
            SubmitError::Authentication.into()
        }
    }
}
