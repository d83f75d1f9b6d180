//! Quote lookup form state and its reducer.
//!
//! `FormState` holds everything the form shows: the text field, the symbol
//! directory, the last error and the last price. It changes only through
//! [`FormState::apply`], which takes one [`Event`] and returns the network
//! call to start next, if any. The reducer never performs I/O itself, so the
//! whole form can be exercised without a terminal or a network.
//!
//! Rules:
//! - Typing validates locally against the directory; it never calls the API.
//! - Submitting an empty or unknown symbol never calls the API.
//! - Any failure of a call collapses to that call's fixed `Notice`; the detail
//!   is logged.
//! - Error and price are never shown together; the error wins.
use log::{error, info};

use crate::notice::Notice;
use crate::quote::{QuoteSnapshot, SymbolRecord};
use crate::result::Result;
use crate::symbols::{SymbolSet, normalize};

/// Load state of the symbol directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectoryStatus {
    /// Not requested yet.
    #[default]
    Idle,
    /// Request in flight.
    Loading,
    /// Loaded; the set may still be empty if the exchange lists nothing.
    Ready,
    /// Request failed; the set stays empty for the rest of the session.
    Failed,
}

/// Input to the reducer.
#[derive(Debug)]
pub enum Event {
    /// The form was shown. Starts the directory load the first time.
    Mount,
    /// The directory call finished.
    SymbolsLoaded(Result<Vec<SymbolRecord>>),
    /// The text field changed to the given raw text.
    InputChanged(String),
    /// The user asked for the price of the current symbol.
    Submit,
    /// A quote call finished.
    QuoteLoaded {
        /// Symbol the call was issued for.
        symbol: String,
        /// Outcome of the call.
        result: Result<QuoteSnapshot>,
    },
}

/// Network call requested by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Load the symbol directory.
    FetchSymbols,
    /// Load the quote for a validated symbol.
    FetchQuote(String),
}

/// A fetched price together with the symbol it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Price {
    /// Symbol the quote was requested for.
    pub symbol: String,
    /// Current price.
    pub value: f64,
}

/// What the form displays below the input field.
#[derive(Debug, Clone, PartialEq)]
pub enum Output<'a> {
    /// An error notice.
    Error(Notice),
    /// The last fetched price.
    Price(&'a Price),
}

/// Complete state of the quote lookup form.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    symbol: String,
    error: Option<Notice>,
    price: Option<Price>,
    symbols: SymbolSet,
    directory: DirectoryStatus,
}

impl FormState {
    /// Creates an unmounted form with an empty field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a form whose directory is already loaded.
    pub fn with_symbols(symbols: SymbolSet) -> Self {
        FormState {
            symbols,
            directory: DirectoryStatus::Ready,
            ..Self::default()
        }
    }

    /// Current (normalized) content of the text field.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Last error, if any.
    pub fn error(&self) -> Option<Notice> {
        self.error
    }

    /// Last fetched price value, if any.
    pub fn price(&self) -> Option<f64> {
        self.price.as_ref().map(|p| p.value)
    }

    /// Symbol directory.
    pub fn symbols(&self) -> &SymbolSet {
        &self.symbols
    }

    /// Load state of the symbol directory.
    pub fn directory(&self) -> DirectoryStatus {
        self.directory
    }

    /// What should be displayed; the error takes precedence over the price.
    pub fn view(&self) -> Option<Output<'_>> {
        match (&self.error, &self.price) {
            (Some(notice), _) => Some(Output::Error(*notice)),
            (None, Some(price)) => Some(Output::Price(price)),
            (None, None) => None,
        }
    }

    /// Applies one event and returns the network call to start, if any.
    pub fn apply(&mut self, event: Event) -> Option<Effect> {
        match event {
            Event::Mount => self.mount(),
            Event::SymbolsLoaded(result) => {
                self.symbols_loaded(result);
                None
            }
            Event::InputChanged(raw) => {
                self.input_changed(&raw);
                None
            }
            Event::Submit => self.submit(),
            Event::QuoteLoaded { symbol, result } => {
                self.quote_loaded(symbol, result);
                None
            }
        }
    }

    fn mount(&mut self) -> Option<Effect> {
        if self.directory != DirectoryStatus::Idle {
            return None;
        }
        self.directory = DirectoryStatus::Loading;
        Some(Effect::FetchSymbols)
    }

    fn symbols_loaded(&mut self, result: Result<Vec<SymbolRecord>>) {
        match result {
            Ok(records) => {
                self.symbols = SymbolSet::from_records(records);
                self.directory = DirectoryStatus::Ready;
                info!("Loaded {} symbols", self.symbols.len());
            }
            Err(e) => {
                error!("Error fetching symbols ({:?}): {}", e.kind(), e);
                self.symbols = SymbolSet::new();
                self.directory = DirectoryStatus::Failed;
                self.error = Some(Notice::SymbolsUnavailable);
            }
        }
    }

    fn input_changed(&mut self, raw: &str) {
        self.symbol = normalize(raw);
        self.price = None;
        self.error = if self.symbol.is_empty() || self.symbols.contains(&self.symbol) {
            None
        } else {
            Some(Notice::InvalidSymbol)
        };
    }

    fn submit(&mut self) -> Option<Effect> {
        if self.symbol.is_empty() {
            self.error = Some(Notice::EmptySymbol);
            return None;
        }
        if !self.symbols.contains(&self.symbol) {
            self.error = Some(Notice::UnknownSymbol);
            self.price = None;
            return None;
        }
        Some(Effect::FetchQuote(self.symbol.clone()))
    }

    fn quote_loaded(&mut self, symbol: String, result: Result<QuoteSnapshot>) {
        match result {
            Ok(quote) => {
                self.price = Some(Price { symbol, value: quote.current });
                self.error = None;
            }
            Err(e) => {
                error!("Error fetching stock price for {} ({:?}): {}", symbol, e.kind(), e);
                self.price = None;
                self.error = Some(Notice::PriceUnavailable);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuoteError;
    use reqwest::StatusCode;

    fn form(symbols: &[&str]) -> FormState {
        FormState::with_symbols(symbols.iter().collect())
    }

    fn quote(price: f64) -> QuoteSnapshot {
        serde_json::from_value(serde_json::json!({ "c": price })).unwrap()
    }

    fn server_error() -> QuoteError {
        QuoteError::Status {
            endpoint: "/quote",
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn priced(symbols: &[&str], symbol: &str, value: f64) -> FormState {
        let mut state = form(symbols);
        state.apply(Event::InputChanged(symbol.into()));
        state.apply(Event::QuoteLoaded {
            symbol: symbol.into(),
            result: Ok(quote(value)),
        });
        state
    }

    #[test]
    fn mount_requests_directory_once() {
        let mut state = FormState::new();
        assert_eq!(state.apply(Event::Mount), Some(Effect::FetchSymbols));
        assert_eq!(state.directory(), DirectoryStatus::Loading);
        assert_eq!(state.apply(Event::Mount), None);
    }

    #[test]
    fn directory_failure_leaves_set_empty() {
        let mut state = FormState::new();
        state.apply(Event::Mount);
        state.apply(Event::SymbolsLoaded(Err(server_error())));
        assert!(state.symbols().is_empty());
        assert_eq!(state.directory(), DirectoryStatus::Failed);
        assert_eq!(state.error(), Some(Notice::SymbolsUnavailable));
        assert_eq!(state.error().unwrap().to_string(), "Failed to fetch stock symbols.");
        assert_eq!(state.apply(Event::Mount), None);
    }

    #[test]
    fn directory_success_fills_set() {
        let mut state = FormState::new();
        state.apply(Event::Mount);
        let records = serde_json::from_str(r#"[{"symbol":"AAPL"},{"symbol":"MSFT"}]"#).unwrap();
        state.apply(Event::SymbolsLoaded(Ok(records)));
        assert_eq!(state.directory(), DirectoryStatus::Ready);
        assert_eq!(state.symbols().len(), 2);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn unknown_input_sets_error_and_clears_price() {
        for raw in ["X", "aap", "AAPL ", "msft", "123", "brk.b"] {
            let mut state = priced(&["AAPL"], "AAPL", 10.0);
            assert_eq!(state.apply(Event::InputChanged(raw.into())), None);
            assert_eq!(state.error(), Some(Notice::InvalidSymbol), "input {raw:?}");
            assert_eq!(state.price(), None, "input {raw:?}");
        }
    }

    #[test]
    fn empty_input_clears_error_and_price() {
        let mut state = priced(&["AAPL"], "AAPL", 10.0);
        state.apply(Event::InputChanged("zzz".into()));
        state.apply(Event::InputChanged(String::new()));
        assert_eq!(state.error(), None);
        assert_eq!(state.price(), None);

        let mut state = priced(&["AAPL"], "AAPL", 10.0);
        state.apply(Event::InputChanged(String::new()));
        assert_eq!(state.price(), None);
        assert_eq!(state.view(), None);
    }

    #[test]
    fn known_input_is_uppercased() {
        let mut state = form(&["AAPL"]);
        state.apply(Event::InputChanged("aApL".into()));
        assert_eq!(state.symbol(), "AAPL");
        assert_eq!(state.error(), None);
    }

    #[test]
    fn empty_submit_never_fetches() {
        let mut state = form(&["AAPL"]);
        assert_eq!(state.apply(Event::Submit), None);
        assert_eq!(state.error(), Some(Notice::EmptySymbol));
    }

    #[test]
    fn unknown_submit_never_fetches() {
        let mut state = form(&["AAPL"]);
        state.apply(Event::InputChanged("tsla".into()));
        assert_eq!(state.apply(Event::Submit), None);
        assert_eq!(state.error(), Some(Notice::UnknownSymbol));
        assert_eq!(state.price(), None);
    }

    #[test]
    fn submit_before_directory_loads_is_unknown() {
        let mut state = FormState::new();
        state.apply(Event::Mount);
        state.apply(Event::InputChanged("aapl".into()));
        assert_eq!(state.apply(Event::Submit), None);
        assert_eq!(state.error(), Some(Notice::UnknownSymbol));
    }

    #[test]
    fn known_submit_fetches_and_shows_price() {
        let mut state = form(&["AAPL"]);
        state.apply(Event::InputChanged("aapl".into()));
        assert_eq!(state.apply(Event::Submit), Some(Effect::FetchQuote("AAPL".into())));

        state.apply(Event::QuoteLoaded {
            symbol: "AAPL".into(),
            result: Ok(quote(150.25)),
        });
        assert_eq!(state.price(), Some(150.25));
        assert_eq!(state.error(), None);
        match state.view() {
            Some(Output::Price(price)) => {
                assert_eq!(price.symbol, "AAPL");
                assert_eq!(price.value, 150.25);
            }
            other => panic!("unexpected view: {other:?}"),
        }
    }

    #[test]
    fn failed_quote_shows_notice() {
        let mut state = priced(&["AAPL"], "AAPL", 10.0);
        state.apply(Event::Submit);
        state.apply(Event::QuoteLoaded {
            symbol: "AAPL".into(),
            result: Err(server_error()),
        });
        assert_eq!(state.price(), None);
        assert_eq!(state.view(), Some(Output::Error(Notice::PriceUnavailable)));
    }

    #[test]
    fn every_failure_kind_maps_to_one_notice() {
        let malformed = || QuoteError::Malformed {
            endpoint: "/quote",
            source: serde_json::from_str::<f64>("[").unwrap_err(),
        };
        let failures: Vec<fn() -> QuoteError> = vec![
            server_error,
            malformed,
            || QuoteError::Task("panicked".into()),
        ];
        for failure in failures {
            let mut state = priced(&["AAPL"], "AAPL", 10.0);
            state.apply(Event::QuoteLoaded {
                symbol: "AAPL".into(),
                result: Err(failure()),
            });
            assert_eq!(state.view(), Some(Output::Error(Notice::PriceUnavailable)));

            let mut state = FormState::new();
            state.apply(Event::Mount);
            state.apply(Event::SymbolsLoaded(Err(failure())));
            assert_eq!(state.view(), Some(Output::Error(Notice::SymbolsUnavailable)));
        }
    }

    #[test]
    fn error_takes_precedence_in_view() {
        let mut state = priced(&["AAPL"], "AAPL", 10.0);
        state.apply(Event::Submit);
        // A directory failure arriving late sets the error without touching the price.
        state.apply(Event::SymbolsLoaded(Err(server_error())));
        assert_eq!(state.price(), Some(10.0));
        assert_eq!(state.view(), Some(Output::Error(Notice::SymbolsUnavailable)));
    }

    #[test]
    fn empty_submit_keeps_previous_price() {
        let mut state = form(&["AAPL"]);
        state.apply(Event::QuoteLoaded {
            symbol: "AAPL".into(),
            result: Ok(quote(1.5)),
        });
        state.apply(Event::Submit);
        assert_eq!(state.price(), Some(1.5));
        assert_eq!(state.view(), Some(Output::Error(Notice::EmptySymbol)));
    }
}
