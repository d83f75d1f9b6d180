//! Quote Checker — a terminal form that looks up the latest price of a stock ticker.
//!
//! On start it loads the symbol directory of one exchange from the Finnhub API.
//! Every line typed is validated against that directory and, if known, the
//! current price is fetched and printed. Validation is local; only known
//! symbols reach the quote endpoint.
//!
//! Usage example (CLI):
//! ```bash
//! FINNHUB_API_KEY=... quote_checker          # interactive form
//! FINNHUB_API_KEY=... quote_checker aapl     # one lookup, exit status 1 on error
//! ```
//!
//! The key may also live in a `.env` file. Diagnostics go to stderr and follow
//! `RUST_LOG`; form output goes to stdout.
#![warn(missing_docs)]
mod args;
mod command;
#[cfg(test)]
mod fake;
mod render;
mod session;
mod terminal;

use crate::args::Args;
use crate::session::Session;
use crate::terminal::{run_interactive, run_once};
use clap::Parser;
use log::debug;
use quote_common::{Event, FinnhubClient, QuoteError, Result};
use std::io;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> Result<(), QuoteError> {
    dotenv::dotenv().ok();
    init_logger();
    let args = Args::parse();

    let config = args.to_config()?;
    debug!("Config: {:?}", config);
    let client = FinnhubClient::new(config)?;

    let mut session = Session::new(client);
    session.dispatch(Event::Mount);
    let mut stdout = io::stdout();

    match args.symbol {
        Some(symbol) => {
            if !run_once(&mut session, &symbol, &mut stdout).await? {
                std::process::exit(1);
            }
            Ok(())
        }
        None => {
            let stdin = BufReader::new(tokio::io::stdin());
            run_interactive(&mut session, stdin, &mut stdout, tokio::signal::ctrl_c()).await
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
