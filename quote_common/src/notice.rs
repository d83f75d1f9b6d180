//! Fixed user-facing messages shown by the form.
use strum::Display;

/// Every message the form can show in place of a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Notice {
    /// The symbol directory could not be loaded.
    #[strum(to_string = "Failed to fetch stock symbols.")]
    SymbolsUnavailable,
    /// Typed text is not a known symbol.
    #[strum(to_string = "Stock symbol not found or invalid.")]
    InvalidSymbol,
    /// Submitted with an empty field.
    #[strum(to_string = "Please enter a stock symbol.")]
    EmptySymbol,
    /// Submitted a symbol that is not in the directory.
    #[strum(to_string = "Stock symbol not found.")]
    UnknownSymbol,
    /// The quote call failed.
    #[strum(to_string = "Failed to fetch stock price.")]
    PriceUnavailable,
}
