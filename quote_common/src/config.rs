//! Runtime configuration for the market-data client.
use std::fmt;
use std::time::Duration;

use crate::error::QuoteError;
use crate::net::{DEFAULT_BASE_URL, DEFAULT_EXCHANGE, DEFAULT_TIMEOUT_SECS};
use crate::result::Result;

/// Settings read once at start.
#[derive(Clone)]
pub struct Config {
    /// Finnhub API token, sent as the `token` query parameter.
    pub api_key: String,
    /// API base URL, e.g. `https://finnhub.io/api/v1`.
    pub base_url: String,
    /// Exchange code for the symbol directory.
    pub exchange: String,
    /// Transport timeout applied to every request.
    pub timeout: Duration,
}

impl Config {
    /// Creates a configuration with default endpoints.
    ///
    /// Fails with `QuoteError::Config` when the key is empty.
    pub fn new(api_key: &str) -> Result<Self> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(QuoteError::Config(String::from("FINNHUB_API_KEY is empty")));
        }
        Ok(Config {
            api_key: String::from(api_key),
            base_url: String::from(DEFAULT_BASE_URL),
            exchange: String::from(DEFAULT_EXCHANGE),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Overrides the API base URL.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        let base_url = base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(QuoteError::Config(format!("invalid base URL: {}", base_url)));
        }
        self.base_url = String::from(base_url);
        Ok(self)
    }

    /// Overrides the exchange code. Stored uppercase.
    pub fn with_exchange(mut self, exchange: &str) -> Self {
        self.exchange = exchange.trim().to_uppercase();
        self
    }

    /// Overrides the transport timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// Keeps the token out of debug logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("exchange", &self.exchange)
            .field("timeout", &self.timeout)
            .finish()
    }
}
