//! Client configuration.
//!
//! Credentials are taken as-is; this crate never obtains or refreshes them.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

pub const DEFAULT_BASE_URL: &str = "https://api.bitbucket.org/";

pub const ENV_BASE_URL: &str = "BITBUCKET_BASE_URL";
pub const ENV_USERNAME: &str = "BITBUCKET_USERNAME";
pub const ENV_PASSWORD: &str = "BITBUCKET_PASSWORD";

/// Where requests go and which credentials, if any, accompany them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            username: None,
            password: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    pub fn with_credentials(mut self, username: &str, password: &str) -> Self {
        self.username = Some(username.to_string());
        self.password = Some(password.to_string());
        self
    }

    /// Read `BITBUCKET_BASE_URL`, `BITBUCKET_USERNAME` and
    /// `BITBUCKET_PASSWORD`. Unset or empty variables fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|value: &String| !value.is_empty());
        Self {
            base_url: var(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            username: var(ENV_USERNAME),
            password: var(ENV_PASSWORD),
        }
    }

    /// `Basic` authorization header value when a username is configured.
    pub fn authorization(&self) -> Option<String> {
        let username = self.username.as_deref()?;
        let password = self.password.as_deref().unwrap_or_default();
        Some(format!(
            "Basic {}",
            STANDARD.encode(format!("{username}:{password}"))
        ))
    }
}
