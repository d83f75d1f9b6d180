//! Runs the form against a `MarketData` implementation.
//!
//! A `Session` owns the `FormState` and is its only writer. Network calls
//! requested by the reducer are spawned into a `JoinSet`; each task returns
//! the `Event` that reports its outcome, and the owner feeds it to the form
//! with [`Session::complete`]. Calls are never cancelled: a completion always
//! lands, even if the user has typed something else in the meantime. A task
//! that dies without reporting is turned into a failed completion for the
//! call it was running.
use std::collections::HashMap;

use log::{debug, error};
use quote_common::form::{DirectoryStatus, Effect, Event, FormState};
use quote_common::{MarketData, QuoteError};
use tokio::task::{Id, JoinSet};

/// Form state plus the background calls it started.
pub struct Session<M> {
    client: M,
    state: FormState,
    tasks: JoinSet<Event>,
    pending: HashMap<Id, Effect>,
}

impl<M> Session<M>
where
    M: MarketData + Clone + Send + Sync + 'static,
{
    /// Creates an unmounted session.
    pub fn new(client: M) -> Self {
        Session {
            client,
            state: FormState::new(),
            tasks: JoinSet::new(),
            pending: HashMap::new(),
        }
    }

    /// Current form state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Number of network calls that have not reported back yet.
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// Feeds a user event to the form, starting a network call if requested.
    /// Returns `true` if a call was started.
    pub fn dispatch(&mut self, event: Event) -> bool {
        match self.state.apply(event) {
            Some(effect) => {
                self.spawn(effect);
                true
            }
            None => false,
        }
    }

    /// Waits for the next network call to finish. Returns `None` when nothing
    /// is in flight. Cancel-safe.
    pub async fn next_completion(&mut self) -> Option<Event> {
        match self.tasks.join_next_with_id().await? {
            Ok((id, event)) => {
                self.pending.remove(&id);
                Some(event)
            }
            Err(e) => {
                let effect = self.pending.remove(&e.id())?;
                error!("Background call {:?} ended without a result: {}", effect, e);
                Some(failed(effect, QuoteError::Task(e.to_string())))
            }
        }
    }

    /// Applies a completion received from [`Session::next_completion`].
    pub fn complete(&mut self, event: Event) {
        self.dispatch(event);
    }

    /// Applies completions until the directory load has finished.
    pub async fn wait_for_directory(&mut self) {
        while self.state.directory() == DirectoryStatus::Loading {
            match self.next_completion().await {
                Some(event) => self.complete(event),
                None => break,
            }
        }
    }

    /// Applies completions until no call is in flight.
    pub async fn settle(&mut self) {
        while self.in_flight() > 0 {
            if let Some(event) = self.next_completion().await {
                self.complete(event);
            }
        }
    }

    fn spawn(&mut self, effect: Effect) {
        let client = self.client.clone();
        let handle = match effect.clone() {
            Effect::FetchSymbols => {
                debug!("Loading symbol directory");
                self.tasks.spawn(async move {
                    Event::SymbolsLoaded(client.fetch_symbols().await)
                })
            }
            Effect::FetchQuote(symbol) => {
                debug!("Fetching quote for {}", symbol);
                self.tasks.spawn(async move {
                    let result = client.fetch_quote(&symbol).await;
                    Event::QuoteLoaded { symbol, result }
                })
            }
        };
        self.pending.insert(handle.id(), effect);
    }
}

/// Completion reporting `err` for the call behind `effect`.
fn failed(effect: Effect, err: QuoteError) -> Event {
    match effect {
        Effect::FetchSymbols => Event::SymbolsLoaded(Err(err)),
        Effect::FetchQuote(symbol) => Event::QuoteLoaded {
            symbol,
            result: Err(err),
        },
    }
}
