//! Payloads returned by the market-data endpoints.
//!
//! Both types are decoded with `serde_json`. Only `symbol` and `c` are
//! required; the other fields are optional because Finnhub returns `null` for
//! them on thinly traded or unknown symbols.
use serde::Deserialize;

/// One entry of the symbol directory.
#[derive(Debug, Clone, Deserialize)]
pub struct SymbolRecord {
    /// Ticker symbol (e.g., `AAPL`).
    pub symbol: String,
    /// Company or security name.
    #[serde(default)]
    pub description: Option<String>,
    /// Symbol as shown by the exchange.
    #[serde(default, rename = "displaySymbol")]
    pub display_symbol: Option<String>,
    /// Security type, e.g. `Common Stock`.
    #[serde(default, rename = "type")]
    pub security_type: Option<String>,
    /// Trading currency.
    #[serde(default)]
    pub currency: Option<String>,
}

/// Latest quote for a single symbol.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteSnapshot {
    /// Current price.
    #[serde(rename = "c")]
    pub current: f64,
    /// Absolute change since previous close.
    #[serde(default, rename = "d")]
    pub change: Option<f64>,
    /// Percent change since previous close.
    #[serde(default, rename = "dp")]
    pub percent_change: Option<f64>,
    /// High of the day.
    #[serde(default, rename = "h")]
    pub high: Option<f64>,
    /// Low of the day.
    #[serde(default, rename = "l")]
    pub low: Option<f64>,
    /// Open of the day.
    #[serde(default, rename = "o")]
    pub open: Option<f64>,
    /// Previous close.
    #[serde(default, rename = "pc")]
    pub previous_close: Option<f64>,
    /// Quote time, seconds since the UNIX epoch.
    #[serde(default, rename = "t")]
    pub timestamp: Option<i64>,
}
