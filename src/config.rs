//! Gate configuration: where to land by default and which query key carries
//! the return path. The login route itself is fixed at [`LOGIN_PATH`] because
//! router segments are compile-time constants.
//!
//! The wasm bundle has no process environment, so values are baked in at
//! compile time by [`GateConfig::from_build_env`]; the SSR shell and the
//! hydrated client therefore agree on every href.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use url::Url;

pub const LOGIN_PATH: &str = "/login";
pub const DEFAULT_REDIRECT_PATH: &str = "/";
pub const DEFAULT_REDIRECT_PARAM: &str = "from";

pub const DEFAULT_REDIRECT_KEY: &str = "SESSION_GATE_DEFAULT_REDIRECT";
pub const REDIRECT_PARAM_KEY: &str = "SESSION_GATE_REDIRECT_PARAM";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a same-origin path starting with '/', got '{value}'")]
    InvalidPath { key: &'static str, value: String },
    #[error("{key} must not be empty")]
    EmptyKey { key: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateConfig {
    pub default_redirect: String,
    pub redirect_param: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            default_redirect: DEFAULT_REDIRECT_PATH.to_owned(),
            redirect_param: DEFAULT_REDIRECT_PARAM.to_owned(),
        }
    }
}

impl GateConfig {
    /// Build config from any key/value source.
    ///
    /// Optional:
    /// - `SESSION_GATE_DEFAULT_REDIRECT`: default `/`
    /// - `SESSION_GATE_REDIRECT_PARAM`: default `from`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the default redirect is not same-origin or the redirect
    /// parameter is blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_redirect = parse_path(DEFAULT_REDIRECT_KEY, lookup(DEFAULT_REDIRECT_KEY), DEFAULT_REDIRECT_PATH)?;
        let redirect_param = match lookup(REDIRECT_PARAM_KEY) {
            None => DEFAULT_REDIRECT_PARAM.to_owned(),
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyKey { key: REDIRECT_PARAM_KEY }),
            Some(raw) => raw.trim().to_owned(),
        };
        Ok(Self { default_redirect, redirect_param })
    }

    /// Config from values captured when the crate was compiled.
    ///
    /// Falls back to defaults (with a warning) if a baked-in value is invalid.
    pub fn from_build_env() -> Self {
        Self::from_lookup(build_env).unwrap_or_else(|e| {
            leptos::logging::warn!("invalid gate config, using defaults: {e}");
            Self::default()
        })
    }
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        DEFAULT_REDIRECT_KEY => option_env!("SESSION_GATE_DEFAULT_REDIRECT"),
        REDIRECT_PARAM_KEY => option_env!("SESSION_GATE_REDIRECT_PARAM"),
        _ => None,
    };
    value.map(str::to_owned)
}

fn parse_path(key: &'static str, raw: Option<String>, default: &str) -> Result<String, ConfigError> {
    match raw {
        None => Ok(default.to_owned()),
        Some(value) if is_local_path(value.trim()) => Ok(value.trim().to_owned()),
        Some(value) => Err(ConfigError::InvalidPath { key, value }),
    }
}

/// Stand-in origin for resolving candidate paths the way a browser does.
const LOCAL_BASE: &str = "http://session-gate.invalid/";

/// True for paths that stay on the current origin.
///
/// Browsers drop tab, CR and LF before resolving and read `\` as `/`, so
/// `/\t/host` and `/\host` both leave the site. Control characters are
/// rejected outright; anything else is resolved against a fixed base and
/// must keep its origin.
pub fn is_local_path(path: &str) -> bool {
    if !path.starts_with('/') || path.chars().any(|c| c.is_ascii_control()) {
        return false;
    }
    let Ok(base) = Url::parse(LOCAL_BASE) else {
        return false;
    };
    base.join(path).is_ok_and(|resolved| resolved.origin() == base.origin())
}
