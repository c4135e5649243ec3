//! Where the ideas API lives.
//!
//! The base URL is resolved once at process start. The host reads
//! `IDEA_BOARD_API_URL` and hands the result to the browser inside
//! `index.html`; a frontend served without that injection falls back to the
//! value baked in at compile time.

use serde::{Deserialize, Serialize};

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "IDEA_BOARD_API_URL";

/// Local development address of the ideas API.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Configuration the browser client needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
        }
    }
}

impl ClientConfig {
    pub fn new(api_url: impl AsRef<str>) -> Self {
        Self::from_override(Some(api_url.as_ref()))
    }

    /// Read [`API_URL_ENV`] from the process environment.
    pub fn from_env() -> Self {
        Self::from_override(std::env::var(API_URL_ENV).ok().as_deref())
    }

    /// Value of [`API_URL_ENV`] at compile time, if any.
    pub fn compiled() -> Self {
        Self::from_override(option_env!("IDEA_BOARD_API_URL"))
    }

    /// Apply an optional override. Blank overrides are ignored and trailing
    /// slashes are stripped.
    pub fn from_override(value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(url) => Self {
                api_url: url.trim_end_matches('/').to_owned(),
            },
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_dev_address() {
        assert_eq!(ClientConfig::from_override(None).api_url, "http://localhost:8000");
    }

    #[test]
    fn override_wins() {
        let config = ClientConfig::from_override(Some("https://ideas.example.com"));
        assert_eq!(config.api_url, "https://ideas.example.com");
    }

    #[test]
    fn blank_override_falls_back() {
        assert_eq!(ClientConfig::from_override(Some("   ")), ClientConfig::default());
    }

    #[test]
    fn trailing_slashes_are_stripped() {
        assert_eq!(
            ClientConfig::new(" http://10.0.0.2:8000/ ").api_url,
            "http://10.0.0.2:8000"
        );
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: ClientConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ClientConfig::default());
    }
}
