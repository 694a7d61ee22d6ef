//! The seam between the trigger and whatever renders it.

use crate::trigger::ShortenOutcome;
use crate::ui::format_outcome;

/// UI surface the trigger reads from and writes to.
///
/// Mirrors the three touch points the trigger needs: the input control's
/// value and the result region. Keeping them behind a trait lets tests run
/// the full operation against [`MemorySurface`] instead of a terminal.
pub trait Surface {
    /// Current content of the URL input control.
    fn input_value(&self) -> String;

    /// Overwrites the input control, e.g. to clear it after a success.
    fn set_input_value(&mut self, value: &str);

    /// Replaces the result region with a rendering of `outcome`.
    ///
    /// Called once per trigger invocation; previous content is discarded,
    /// nothing accumulates across calls.
    fn render_result(&mut self, outcome: &ShortenOutcome);
}

/// In-memory [`Surface`] for tests: records the last rendered outcome
/// instead of printing it.
#[derive(Debug, Default)]
pub struct MemorySurface {
    input: String,
    rendered: Option<ShortenOutcome>,
}

impl MemorySurface {
    /// Creates a surface whose input control already holds `value`.
    pub fn with_input(value: &str) -> Self {
        Self {
            input: value.to_string(),
            rendered: None,
        }
    }

    /// Last outcome written to the result region, if any.
    pub fn last_rendered(&self) -> Option<&ShortenOutcome> {
        self.rendered.as_ref()
    }

    /// Plain-text form of the result region, as a user would read it.
    pub fn result_text(&self) -> Option<String> {
        self.rendered.as_ref().map(format_outcome)
    }
}

impl Surface for MemorySurface {
    fn input_value(&self) -> String {
        self.input.clone()
    }

    fn set_input_value(&mut self, value: &str) {
        self.input = value.to_string();
    }

    fn render_result(&mut self, outcome: &ShortenOutcome) {
        self.rendered = Some(outcome.clone());
    }
}
