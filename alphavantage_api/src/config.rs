//! Client configuration.

use std::env;
use std::time::Duration;

use url::Url;

use crate::{
    errors::ConfigError,
    transport::{DEFAULT_BASE_URL, REQUEST_TIMEOUT},
};

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "ALPHAVANTAGE_API_KEY";
/// Optional environment variable overriding the host.
pub const ENV_BASE_URL: &str = "ALPHAVANTAGE_BASE_URL";

/// Everything a [`Client`](crate::Client) needs to reach Alpha Vantage.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub api_key: String,
    /// Scheme and host requests are sent to. Defaults to `https://www.alphavantage.co`.
    pub base_url: String,
    /// Per-request timeout. Defaults to 30 seconds.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Reads `ALPHAVANTAGE_API_KEY` and, if set, `ALPHAVANTAGE_BASE_URL`.
    ///
    /// A `.env` file in the working directory is loaded first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let api_key = env::var(ENV_API_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        let mut config = Self::new(api_key);
        if let Ok(base_url) = env::var(ENV_BASE_URL) {
            Url::parse(&base_url)?;
            config.base_url = base_url;
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
