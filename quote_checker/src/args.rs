//! Command-line arguments for the Quote Checker.
//!
//! Every option except the symbol can also come from the environment; a `.env`
//! file in the working directory is loaded before parsing.
use std::time::Duration;

use clap::Parser;
use quote_common::Config;
use quote_common::Result;
use quote_common::net::{DEFAULT_BASE_URL, DEFAULT_EXCHANGE, DEFAULT_TIMEOUT_SECS};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Finnhub API token. Required; a missing token is reported as a configuration error.
    #[clap(long, env = "FINNHUB_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the market-data API.
    #[clap(long, env = "FINNHUB_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Exchange whose symbol directory is loaded at start.
    #[clap(long, default_value = DEFAULT_EXCHANGE)]
    pub exchange: String,

    /// Timeout for each HTTP request, in seconds.
    #[clap(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Look up this symbol once and exit. Without it the form runs interactively.
    pub symbol: Option<String>,
}

impl Args {
    /// Builds the client configuration from the parsed arguments.
    pub fn to_config(&self) -> Result<Config> {
        Ok(Config::new(self.api_key.as_deref().unwrap_or_default())?
            .with_base_url(&self.base_url)?
            .with_exchange(&self.exchange)
            .with_timeout(Duration::from_secs(self.timeout_secs)))
    }
}
