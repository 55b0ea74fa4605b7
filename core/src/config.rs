//! Base URL resolution.
//!
//! Precedence: explicit value, then `TODO_API_URL`, then the local default.

use url::Url;

use crate::error::TransportError;

/// Environment variable consulted when no explicit base URL is given.
pub const API_URL_ENV: &str = "TODO_API_URL";

/// Loopback address of a locally running todo service.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Validated client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Validate `base_url` as an http(s) URL and strip any trailing slash.
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        let invalid = |reason: String| TransportError::InvalidConfig {
            url: base_url.to_string(),
            reason,
        };

        let parsed = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {:?}", parsed.scheme())));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(invalid("query and fragment are not allowed".to_string()));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve using `explicit` when given, otherwise the environment.
    pub fn resolve(explicit: Option<&str>) -> Result<Self, TransportError> {
        Self::resolve_with(explicit, |key| std::env::var(key).ok())
    }

    fn resolve_with(
        explicit: Option<&str>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, TransportError> {
        match explicit {
            Some(url) => Self::new(url),
            None => match env(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
                Some(url) => Self::new(url.trim()),
                None => Self::new(DEFAULT_API_URL),
            },
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}
