//! DTOs for the `/shorten` endpoint.

use serde::{Deserialize, Serialize};

/// Request body for `POST /shorten`.
#[derive(Debug, Serialize)]
pub struct ShortenRequest<'a> {
    /// The original URL to shorten, already trimmed of surrounding whitespace.
    pub url: &'a str,
}

/// Successful response from `POST /shorten`.
///
/// The server may include additional fields; only `short_url` is read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShortenResponse {
    /// The generated short link, ready to present to the user.
    pub short_url: String,
}
