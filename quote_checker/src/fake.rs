//! In-memory `MarketData` for tests.
use quote_common::quote::{QuoteSnapshot, SymbolRecord};
use quote_common::{MarketData, QuoteError, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Market with a fixed directory and price that counts calls.
#[derive(Clone, Default)]
pub struct FakeMarket {
    /// `None` makes the directory call fail.
    pub symbols: Option<Vec<&'static str>>,
    /// `None` makes the quote call fail.
    pub price: Option<f64>,
    /// Delay before a quote call answers.
    pub quote_delay: Duration,
    /// Quote calls panic instead of answering.
    pub quote_panics: bool,
    symbol_calls: Arc<AtomicUsize>,
    quote_calls: Arc<AtomicUsize>,
}

impl FakeMarket {
    pub fn new(symbols: Option<Vec<&'static str>>, price: Option<f64>) -> Self {
        FakeMarket {
            symbols,
            price,
            ..Default::default()
        }
    }

    pub fn symbol_calls(&self) -> usize {
        self.symbol_calls.load(Ordering::SeqCst)
    }

    pub fn quote_calls(&self) -> usize {
        self.quote_calls.load(Ordering::SeqCst)
    }

    fn failure(endpoint: &'static str) -> QuoteError {
        QuoteError::Status {
            endpoint,
            status: reqwest::StatusCode::BAD_GATEWAY,
        }
    }
}

impl MarketData for FakeMarket {
    async fn fetch_symbols(&self) -> Result<Vec<SymbolRecord>> {
        self.symbol_calls.fetch_add(1, Ordering::SeqCst);
        let symbols = self.symbols.clone().ok_or_else(|| Self::failure("/stock/symbol"))?;
        let json = serde_json::Value::Array(
            symbols
                .into_iter()
                .map(|s| serde_json::json!({ "symbol": s }))
                .collect(),
        );
        Ok(serde_json::from_value(json).unwrap())
    }

    async fn fetch_quote(&self, symbol: &str) -> Result<QuoteSnapshot> {
        self.quote_calls.fetch_add(1, Ordering::SeqCst);
        if !self.quote_delay.is_zero() {
            tokio::time::sleep(self.quote_delay).await;
        }
        if self.quote_panics {
            panic!("quote feed crashed for {symbol}");
        }
        let price = self.price.ok_or_else(|| Self::failure("/quote"))?;
        Ok(serde_json::from_value(serde_json::json!({ "c": price })).unwrap())
    }
}
