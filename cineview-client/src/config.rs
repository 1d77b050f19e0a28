use std::time::Duration;

use serde::Deserialize;

/// Client configuration, layered from defaults and `CINEVIEW_*`
/// environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the catalog API, including the `/api` prefix.
    pub base_url: String,
    /// Overall per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    /// Load configuration, letting `CINEVIEW_BASE_URL` and
    /// `CINEVIEW_REQUEST_TIMEOUT_SECS` override the defaults.
    pub fn from_environment() -> Result<Self, config::ConfigError> {
        let defaults = ClientConfig::default();
        config::Config::builder()
            .set_default("base_url", defaults.base_url)?
            .set_default(
                "request_timeout_secs",
                defaults.request_timeout_secs as i64,
            )?
            .add_source(config::Environment::with_prefix("CINEVIEW"))
            .build()?
            .try_deserialize()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate the base URL early so a typo fails at startup, not on the
    /// first search keystroke.
    pub fn validate(&self) -> Result<(), String> {
        url::Url::parse(&self.base_url)
            .map(|_| ())
            .map_err(|e| format!("invalid base_url `{}`: {e}", self.base_url))
    }
}
