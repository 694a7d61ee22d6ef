//! Rendering surfaces for trigger outcomes.
//!
//! The trigger never prints or prompts by itself; it talks to a [`Surface`],
//! which owns the input value and the result region. [`TerminalSurface`] is
//! the interactive implementation, [`MemorySurface`] the in-memory fake used
//! by tests.

pub mod surface;
pub mod terminal;

pub use surface::{MemorySurface, Surface};
pub use terminal::TerminalSurface;

use crate::error::ShortenError;
use crate::trigger::ShortenOutcome;

/// Uncolored text form of an outcome, shared by every surface.
pub fn format_outcome(outcome: &ShortenOutcome) -> String {
    match outcome {
        Ok(link) => format!("Shortened URL: {}", link.short_url),
        Err(err) => format_error(err),
    }
}

/// Uncolored text form of an error.
///
/// The empty-input validation message is shown as-is; request failures get
/// an `Error:` prefix.
pub fn format_error(err: &ShortenError) -> String {
    match err {
        ShortenError::EmptyInput => err.to_string(),
        _ => format!("Error: {err}"),
    }
}
