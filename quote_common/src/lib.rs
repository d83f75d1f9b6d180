//!
//! Core of the stock price checker, independent of any front-end.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `config` — API credential, endpoints and transport timeout.
//! - `net` — endpoint constants and URL helpers.
//! - `quote` — directory and quote payloads.
//! - `symbols` — the in-memory symbol directory.
//! - `notice` — the fixed messages the form shows.
//! - `client` — the `MarketData` seam and its Finnhub implementation.
//! - `form` — form state and the reducer that drives it.
#![warn(missing_docs)]
pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod net;
pub mod notice;
pub mod quote;
pub mod result;
pub mod symbols;

pub use client::{FinnhubClient, MarketData};
pub use config::Config;
pub use error::QuoteError;
pub use form::{Effect, Event, FormState};
pub use notice::Notice;
pub use result::Result;
