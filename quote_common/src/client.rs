//! HTTP access to the market-data API.
//!
//! `MarketData` is the seam between the form session and the network: the
//! terminal front-end drives it with `FinnhubClient`, tests drive it with
//! in-memory fakes. Every call is a single GET with no retry; the failure is
//! classified into a `QuoteError` variant and returned to the caller.
use std::future::Future;

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::QuoteError;
use crate::net::{QUOTE_PATH, SYMBOL_PATH, endpoint};
use crate::quote::{QuoteSnapshot, SymbolRecord};
use crate::result::Result;

/// Read-only market-data operations used by the form.
pub trait MarketData {
    /// Loads the full symbol directory of the configured exchange.
    fn fetch_symbols(&self) -> impl Future<Output = Result<Vec<SymbolRecord>>> + Send;

    /// Loads the latest quote for `symbol`.
    fn fetch_quote(&self, symbol: &str) -> impl Future<Output = Result<QuoteSnapshot>> + Send;
}

/// `MarketData` backed by the Finnhub REST API.
#[derive(Debug, Clone)]
pub struct FinnhubClient {
    http: Client,
    config: Config,
}

impl FinnhubClient {
    /// Builds a client with the configured transport timeout.
    pub fn new(config: Config) -> Result<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(FinnhubClient { http, config })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &'static str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = endpoint(&self.config.base_url, path);
        debug!("GET {} {:?}", url, query);

        let response = self
            .http
            .get(&url)
            .query(query)
            .query(&[("token", self.config.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Status { endpoint: path, status });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| QuoteError::Malformed { endpoint: path, source })
    }
}

impl MarketData for FinnhubClient {
    async fn fetch_symbols(&self) -> Result<Vec<SymbolRecord>> {
        let records: Vec<SymbolRecord> = self
            .get_json(SYMBOL_PATH, &[("exchange", self.config.exchange.as_str())])
            .await?;
        debug!("Received {} symbols for {}", records.len(), self.config.exchange);
        Ok(records)
    }

    async fn fetch_quote(&self, symbol: &str) -> Result<QuoteSnapshot> {
        let quote: QuoteSnapshot = self.get_json(QUOTE_PATH, &[("symbol", symbol)]).await?;
        debug!("Quote for {}: {:?}", symbol, quote);
        Ok(quote)
    }
}
