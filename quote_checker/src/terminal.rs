//! The two front-end modes: one lookup, or an interactive form.
//!
//! Both write the form output to any `Write`; the interactive loop reads
//! commands from any async line source and stops early when `shutdown`
//! resolves (Ctrl+C in the binary).
use std::future::Future;
use std::io::Write;

use log::{debug, info};
use quote_common::form::Output;
use quote_common::{Event, MarketData, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::command::{CHECK, Command, QUIT};
use crate::render::render;
use crate::session::Session;

/// Looks up a single symbol once the directory has loaded.
/// Returns `false` if the form ended up showing an error.
pub async fn run_once<M, W>(session: &mut Session<M>, symbol: &str, out: &mut W) -> Result<bool>
where
    M: MarketData + Clone + Send + Sync + 'static,
    W: Write,
{
    session.wait_for_directory().await;
    session.dispatch(Event::InputChanged(symbol.trim().to_string()));
    session.dispatch(Event::Submit);
    session.settle().await;

    render(out, session.state())?;
    Ok(!matches!(session.state().view(), Some(Output::Error(_))))
}

/// Reads commands from `input` while network calls complete in the background.
///
/// At end of input the calls still in flight are awaited and rendered; `:q`
/// and `shutdown` leave immediately.
pub async fn run_interactive<M, R, W, S>(
    session: &mut Session<M>,
    input: R,
    out: &mut W,
    shutdown: S,
) -> Result<()>
where
    M: MarketData + Clone + Send + Sync + 'static,
    R: AsyncBufRead + Unpin,
    W: Write,
    S: Future,
{
    let mut lines = input.lines();
    tokio::pin!(shutdown);
    writeln!(out, "Stock Price Checker")?;
    writeln!(out, "Enter a stock symbol (e.g., AAPL). `{} TEXT` validates only, `{}` quits.", CHECK, QUIT)?;

    let mut end_of_input = false;
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    end_of_input = true;
                    break;
                };
                match Command::parse(&line) {
                    Command::Quit => break,
                    Command::Check(text) => {
                        session.dispatch(Event::InputChanged(text));
                        if session.state().view().is_none() && !session.state().symbol().is_empty() {
                            writeln!(out, "{} is a known symbol.", session.state().symbol())?;
                        }
                        render(out, session.state())?;
                    }
                    Command::Lookup(text) => {
                        session.dispatch(Event::InputChanged(text));
                        if session.dispatch(Event::Submit) {
                            info!("Fetching price for {}", session.state().symbol());
                        } else {
                            render(out, session.state())?;
                        }
                    }
                }
            }
            Some(event) = session.next_completion() => {
                session.complete(event);
                render(out, session.state())?;
            }
            _ = &mut shutdown => {
                info!("Ctrl+C received. Shutting down...");
                break;
            }
        }
    }

    if end_of_input {
        debug!("End of input with {} request(s) in flight", session.in_flight());
        return drain(session, out, shutdown).await;
    }
    if session.in_flight() > 0 {
        debug!("Leaving with {} request(s) in flight", session.in_flight());
    }
    Ok(())
}

/// Renders every outstanding completion, unless `shutdown` fires first.
async fn drain<M, W, S>(session: &mut Session<M>, out: &mut W, mut shutdown: S) -> Result<()>
where
    M: MarketData + Clone + Send + Sync + 'static,
    W: Write,
    S: Future + Unpin,
{
    loop {
        tokio::select! {
            completion = session.next_completion() => match completion {
                Some(event) => {
                    session.complete(event);
                    render(out, session.state())?;
                }
                None => return Ok(()),
            },
            _ = &mut shutdown => {
                info!("Ctrl+C received. Shutting down...");
                return Ok(());
            }
        }
    }
}
