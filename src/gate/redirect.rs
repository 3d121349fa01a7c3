//! Post-login destination derived from the incoming query string.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use std::fmt;

use crate::config::{DEFAULT_REDIRECT_PATH, GateConfig, is_local_path};

/// Where an authenticated visitor is sent. Fixed for the whole page visit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectTarget(String);

impl RedirectTarget {
    /// Read the return path from `lookup(config.redirect_param)`.
    ///
    /// A missing or empty value yields `config.default_redirect`. So does a
    /// value that would leave the origin, so the login page cannot be used to
    /// bounce visitors to another site.
    pub fn from_query<F>(lookup: F, config: &GateConfig) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(&config.redirect_param) {
            Some(from) if is_local_path(&from) => Self(from),
            Some(from) if !from.is_empty() => {
                leptos::logging::warn!("ignoring off-site redirect target '{from}'");
                Self(config.default_redirect.clone())
            }
            _ => Self(config.default_redirect.clone()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RedirectTarget {
    fn default() -> Self {
        Self(DEFAULT_REDIRECT_PATH.to_owned())
    }
}

impl fmt::Display for RedirectTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
