//! # Shorten CLI
//!
//! A command-line client for a URL shortener service. It submits one URL to
//! the server's `/shorten` endpoint and renders either the returned short
//! link or an error message.
//!
//! ## Architecture
//!
//! The crate keeps transport, logic, and rendering behind separate seams:
//!
//! - **API Layer** ([`api`]) - The [`api::ShortenApi`] trait and its reqwest
//!   implementation, plus wire DTOs
//! - **Trigger** ([`trigger`]) - The shorten operation: validate input,
//!   submit, render the outcome
//! - **UI Layer** ([`ui`]) - The [`ui::Surface`] abstraction with a terminal
//!   implementation and an in-memory fake for tests
//!
//! ## Quick Start
//!
//! ```bash
//! # Point the client at a shortener server (optional, this is the default)
//! export SHORTENER_URL="http://localhost:8080"
//!
//! # One-shot
//! shorten https://example.com/some/long/path
//!
//! # Interactive prompt
//! shorten
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See the [`config`] module for available options.

pub mod api;
pub mod config;
pub mod error;
pub mod trigger;
pub mod ui;

pub use error::ShortenError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::api::{HttpShortenApi, ShortenApi};
    pub use crate::error::ShortenError;
    pub use crate::trigger::{ShortenOutcome, ShortenTrigger};
    pub use crate::ui::{MemorySurface, Surface, TerminalSurface};
}
