//! The shorten trigger: validate input, submit, render the outcome.

use crate::api::ShortenApi;
use crate::api::dto::ShortenResponse;
use crate::error::ShortenError;
use crate::ui::Surface;

/// Outcome of one trigger invocation, consumed by
/// [`Surface::render_result`].
pub type ShortenOutcome = Result<ShortenResponse, ShortenError>;

/// Submits the surface's current input to the shortener server and renders
/// the result.
///
/// Each invocation is independent and stateless: no retries, no timeout, no
/// history carried between calls. The trigger is reusable indefinitely.
pub struct ShortenTrigger<A: ShortenApi> {
    api: A,
}

impl<A: ShortenApi> ShortenTrigger<A> {
    /// Creates a trigger over the given transport.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Runs one shorten cycle against `surface`.
    ///
    /// # Flow
    ///
    /// 1. Read the surface's input value and trim surrounding whitespace
    /// 2. Reject empty input without touching the network
    /// 3. `POST` the URL to the server and await the single response
    /// 4. Render the outcome; on success, clear the input for the next entry
    ///
    /// The outcome is also returned so callers can branch on it (exit codes)
    /// without re-parsing rendered text.
    pub async fn shorten<S: Surface>(&self, surface: &mut S) -> ShortenOutcome {
        let url = surface.input_value().trim().to_string();

        if url.is_empty() {
            let outcome = Err(ShortenError::EmptyInput);
            surface.render_result(&outcome);
            return outcome;
        }

        let outcome = self.api.shorten(&url).await;
        surface.render_result(&outcome);

        if outcome.is_ok() {
            // Clear input after successful shortening.
            surface.set_input_value("");
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockShortenApi;
    use crate::ui::MemorySurface;

    fn shortened(short_url: &str) -> ShortenResponse {
        ShortenResponse {
            short_url: short_url.to_string(),
        }
    }

    #[tokio::test]
    async fn whitespace_only_input_skips_the_network() {
        let mut mock_api = MockShortenApi::new();
        mock_api.expect_shorten().times(0);

        let trigger = ShortenTrigger::new(mock_api);
        let mut surface = MemorySurface::with_input("  \t  ");

        let outcome = trigger.shorten(&mut surface).await;

        assert_eq!(outcome, Err(ShortenError::EmptyInput));
        assert_eq!(
            surface.result_text().as_deref(),
            Some("Please enter a URL to shorten.")
        );
        // Input is left untouched for the user to correct.
        assert_eq!(surface.input_value(), "  \t  ");
    }

    #[tokio::test]
    async fn submits_the_trimmed_url_exactly_once() {
        let mut mock_api = MockShortenApi::new();
        mock_api
            .expect_shorten()
            .withf(|url| url == "https://example.com/long")
            .times(1)
            .returning(|_| Ok(shortened("https://x.co/abc")));

        let trigger = ShortenTrigger::new(mock_api);
        let mut surface = MemorySurface::with_input("  https://example.com/long  ");

        let outcome = trigger.shorten(&mut surface).await;

        assert_eq!(outcome, Ok(shortened("https://x.co/abc")));
    }

    #[tokio::test]
    async fn success_renders_the_link_and_clears_the_input() {
        let mut mock_api = MockShortenApi::new();
        mock_api
            .expect_shorten()
            .times(1)
            .returning(|_| Ok(shortened("https://x.co/abc")));

        let trigger = ShortenTrigger::new(mock_api);
        let mut surface = MemorySurface::with_input("https://example.com");

        trigger.shorten(&mut surface).await.unwrap();

        assert_eq!(
            surface.result_text().as_deref(),
            Some("Shortened URL: https://x.co/abc")
        );
        assert_eq!(surface.input_value(), "");
    }

    #[tokio::test]
    async fn server_error_embeds_the_status_and_keeps_the_input() {
        let mut mock_api = MockShortenApi::new();
        mock_api
            .expect_shorten()
            .times(1)
            .returning(|_| Err(ShortenError::Status(500)));

        let trigger = ShortenTrigger::new(mock_api);
        let mut surface = MemorySurface::with_input("https://example.com");

        let outcome = trigger.shorten(&mut surface).await;

        assert_eq!(outcome, Err(ShortenError::Status(500)));
        assert!(surface.result_text().unwrap().contains("500"));
        assert_eq!(surface.input_value(), "https://example.com");
    }

    #[tokio::test]
    async fn transport_failure_embeds_the_description_and_keeps_the_input() {
        let mut mock_api = MockShortenApi::new();
        mock_api
            .expect_shorten()
            .times(1)
            .returning(|_| Err(ShortenError::Transport("connection refused".to_string())));

        let trigger = ShortenTrigger::new(mock_api);
        let mut surface = MemorySurface::with_input("https://example.com");

        let outcome = trigger.shorten(&mut surface).await;

        assert!(outcome.is_err());
        assert!(surface.result_text().unwrap().contains("connection refused"));
        assert_eq!(surface.input_value(), "https://example.com");
    }

    #[tokio::test]
    async fn invocations_are_independent() {
        let mut mock_api = MockShortenApi::new();
        mock_api
            .expect_shorten()
            .times(2)
            .returning(|_| Ok(shortened("https://x.co/abc")));

        let trigger = ShortenTrigger::new(mock_api);

        let mut surface = MemorySurface::with_input("https://example.com/1");
        trigger.shorten(&mut surface).await.unwrap();

        // The same trigger handles the next entry with no carried state.
        surface.set_input_value("https://example.com/2");
        trigger.shorten(&mut surface).await.unwrap();

        assert_eq!(surface.input_value(), "");
    }
}
