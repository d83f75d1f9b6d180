//! Terminal rendering of the form output.
use std::io::Write;

use quote_common::form::{FormState, Output};
use quote_common::Result;

/// Writes what the form currently shows; writes nothing for a blank form.
pub fn render<W: Write>(out: &mut W, state: &FormState) -> Result<()> {
    match state.view() {
        Some(Output::Error(notice)) => writeln!(out, "{}", notice)?,
        Some(Output::Price(price)) => {
            writeln!(out, "{}  Current Price: ${}", price.symbol, price.value)?
        }
        None => {}
    }
    out.flush()?;
    Ok(())
}
