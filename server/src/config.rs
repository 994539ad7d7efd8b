//! Environment-driven server configuration.
//!
//! `.env` is loaded by `main` before [`ServerConfig::from_env`] runs, so the
//! same variables work from a file or the real environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_FAILURES: usize = 5;
const DEFAULT_FAILURE_WINDOW_SECS: u64 = 300;
const DEFAULT_SESSION_TTL_SECS: u64 = 7 * 24 * 60 * 60;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Shared access password, trimmed. `None` disables unlocking.
    pub app_password: Option<String>,
    pub cookie_secure: bool,
    /// Failed unlock attempts allowed per client within `failure_window`.
    pub max_failures: usize,
    pub failure_window: Duration,
    /// Key throttling on `X-Forwarded-For`/`X-Real-IP` instead of the peer
    /// address. Only safe behind a proxy that overwrites those headers.
    pub trust_proxy_headers: bool,
    /// Lifetime of an unlocked session and its cookie.
    pub session_ttl: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            app_password: None,
            cookie_secure: false,
            max_failures: DEFAULT_MAX_FAILURES,
            failure_window: Duration::from_secs(DEFAULT_FAILURE_WINDOW_SECS),
            trust_proxy_headers: false,
            session_ttl: Duration::from_secs(DEFAULT_SESSION_TTL_SECS),
        }
    }
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is set but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is set but unparsable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let app_password = lookup("APP_PASSWORD").map(|p| p.trim().to_owned()).filter(|p| !p.is_empty());
        let cookie_secure = bool_or("COOKIE_SECURE", &lookup, defaults.cookie_secure)?;
        let trust_proxy_headers = bool_or("TRUST_PROXY_HEADERS", &lookup, defaults.trust_proxy_headers)?;

        Ok(Self {
            port: parse_or("PORT", &lookup, defaults.port)?,
            app_password,
            cookie_secure,
            max_failures: parse_or("AUTH_MAX_FAILURES", &lookup, defaults.max_failures)?,
            failure_window: Duration::from_secs(parse_or(
                "AUTH_FAILURE_WINDOW_SECS",
                &lookup,
                DEFAULT_FAILURE_WINDOW_SECS,
            )?),
            trust_proxy_headers,
            session_ttl: Duration::from_secs(parse_or("SESSION_TTL_SECS", &lookup, DEFAULT_SESSION_TTL_SECS)?),
        })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn bool_or(
    key: &'static str,
    lookup: &impl Fn(&str) -> Option<String>,
    default: bool,
) -> Result<bool, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { key, value: raw }),
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    lookup: &impl Fn(&str) -> Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
