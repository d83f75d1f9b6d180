//! Error types shared by the library and the terminal front-end.
//!
//! The `QuoteError` enum keeps the failure classes of the market-data calls
//! apart (transport, HTTP status, payload shape) so that the form can map each
//! call's failure to a fixed user notice while the log keeps the detail.
use std::io;

use reqwest::StatusCode;
use thiserror::Error;

/// Unified error type for the workspace.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// Transport failure: connect, TLS, timeout or body read.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("Unexpected HTTP status {status} from {endpoint}")]
    Status {
        /// Endpoint path that was called.
        endpoint: &'static str,
        /// Status returned by the server.
        status: StatusCode,
    },

    /// The body could not be decoded into the expected JSON shape.
    #[error("Malformed {endpoint} payload: {source}")]
    Malformed {
        /// Endpoint path that was called.
        endpoint: &'static str,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error from the terminal.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A background call ended without reporting, e.g. it panicked.
    #[error("Background task failed: {0}")]
    Task(String),
}

/// Coarse classification of a `QuoteError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// See [`QuoteError::Network`].
    Network,
    /// See [`QuoteError::Status`].
    Status,
    /// See [`QuoteError::Malformed`].
    Malformed,
    /// See [`QuoteError::Config`].
    Config,
    /// See [`QuoteError::Io`].
    Io,
    /// See [`QuoteError::Task`].
    Task,
}

impl QuoteError {
    /// Returns the failure class of this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            QuoteError::Network(_) => FailureKind::Network,
            QuoteError::Status { .. } => FailureKind::Status,
            QuoteError::Malformed { .. } => FailureKind::Malformed,
            QuoteError::Config(_) => FailureKind::Config,
            QuoteError::Io(_) => FailureKind::Io,
            QuoteError::Task(_) => FailureKind::Task,
        }
    }
}
