//! Error taxonomy for the shorten operation.
//!
//! Three kinds, all terminal and local to one invocation: empty input
//! (rejected before any network activity), a non-success HTTP status, and
//! transport or parse failures. Each carries everything the rendering layer
//! needs, so errors never propagate beyond the surface they are shown on.

use thiserror::Error;

/// Failure of a single shorten invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenError {
    /// The input was empty (or whitespace only) when the trigger fired.
    /// Detected before any request is issued.
    #[error("Please enter a URL to shorten.")]
    EmptyInput,

    /// The server was reachable but replied with a non-success status.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The request never completed, or the response body was not the
    /// expected JSON shape. Carries the flattened cause chain.
    #[error("{0}")]
    Transport(String),
}

impl ShortenError {
    /// Wraps a transport-level failure, flattening its cause chain into a
    /// single description line.
    pub fn transport(err: impl Into<anyhow::Error>) -> Self {
        Self::Transport(format!("{:#}", err.into()))
    }
}
