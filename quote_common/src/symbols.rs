//! Ticker symbols known to the form.
//!
//! The directory is loaded once per session and then only queried. Symbols are
//! stored uppercase so that membership is an exact match against the
//! normalized input.
use std::collections::HashSet;

use crate::quote::SymbolRecord;

/// Normalizes raw input into the form used for lookups.
pub fn normalize(raw: &str) -> String {
    raw.to_uppercase()
}

/// In-memory set of tradable ticker symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolSet {
    symbols: HashSet<String>,
}

impl SymbolSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set from directory records, skipping blank symbols.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = SymbolRecord>,
    {
        records.into_iter().map(|record| record.symbol).collect()
    }

    /// Returns `true` if `symbol` is present. `symbol` must already be normalized.
    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.contains(symbol)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if no symbols are loaded.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SymbolSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let symbols = iter
            .into_iter()
            .map(|s| normalize(s.as_ref().trim()))
            .filter(|s| !s.is_empty())
            .collect();
        SymbolSet { symbols }
    }
}
