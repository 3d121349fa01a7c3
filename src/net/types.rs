//! Wire DTOs for the auth endpoints.
//!
//! DESIGN
//! ======
//! These mirror the server's JSON bodies for `/api/auth/*` so serde stays the
//! only place that knows the field names.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by `/api/auth/me` and `/api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email, if the server shares it.
    #[serde(default)]
    pub email: Option<String>,
    /// Authentication method used to create the session (e.g. `"password"`).
    #[serde(default = "default_auth_method")]
    pub auth_method: String,
}

fn default_auth_method() -> String {
    "session".to_owned()
}

/// Body of `POST /api/auth/login`.
///
/// `Debug` is hand-written so the password never reaches a log line.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

impl std::fmt::Debug for LoginRequest<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
