//! Transport for the shorten operation.

use crate::api::dto::{ShortenRequest, ShortenResponse};
use crate::error::ShortenError;
use async_trait::async_trait;
use url::Url;

/// Client interface for the shortener server.
///
/// Abstracting the transport keeps [`crate::trigger::ShortenTrigger`]
/// testable without a live server.
///
/// # Implementations
///
/// - [`HttpShortenApi`] - reqwest implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortenApi: Send + Sync {
    /// Submits one URL for shortening and awaits the single response.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::Status`] when the server replies with a
    /// non-success status, and [`ShortenError::Transport`] when the request
    /// fails outright or the response body is not the expected JSON shape.
    async fn shorten(&self, url: &str) -> Result<ShortenResponse, ShortenError>;
}

/// reqwest-backed implementation of [`ShortenApi`].
///
/// Issues `POST /shorten` with a JSON body. No retries, no timeout beyond
/// what the transport itself imposes; each call is a single request.
#[derive(Debug, Clone)]
pub struct HttpShortenApi {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpShortenApi {
    /// Builds a client for the server at `base_url`.
    ///
    /// The shorten endpoint is resolved as `shorten` relative to the base,
    /// so a base of `http://localhost:8080` yields
    /// `http://localhost:8080/shorten`.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be resolved against
    /// `base_url` (e.g. a cannot-be-a-base URL).
    pub fn new(base_url: &Url) -> Result<Self, url::ParseError> {
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint: base_url.join("shorten")?,
        })
    }
}

#[async_trait]
impl ShortenApi for HttpShortenApi {
    async fn shorten(&self, url: &str) -> Result<ShortenResponse, ShortenError> {
        tracing::debug!(endpoint = %self.endpoint, "submitting shorten request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&ShortenRequest { url })
            .send()
            .await
            .map_err(ShortenError::transport)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "shorten request rejected");
            return Err(ShortenError::Status(status.as_u16()));
        }

        response
            .json::<ShortenResponse>()
            .await
            .map_err(ShortenError::transport)
    }
}
