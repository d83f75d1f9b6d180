//! Finnhub endpoint constants and URL helpers.

/// Production API base URL.
pub const DEFAULT_BASE_URL: &str = "https://finnhub.io/api/v1";
/// Exchange whose symbol directory is loaded at start.
pub const DEFAULT_EXCHANGE: &str = "US";
/// Transport timeout for every request, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Symbol directory endpoint path.
pub const SYMBOL_PATH: &str = "/stock/symbol";
/// Quote endpoint path.
pub const QUOTE_PATH: &str = "/quote";

/// Join a base URL and an endpoint path like "base/path".
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
