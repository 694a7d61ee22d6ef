//! Interactive terminal surface built on dialoguer prompts and colored
//! output.

use crate::trigger::ShortenOutcome;
use crate::ui::{Surface, format_error};
use colored::Colorize;
use dialoguer::Input;

/// Terminal-backed [`Surface`].
///
/// The prompt plays the role of the URL input control: typing edits the
/// line buffer without side effects, and Enter submits it, after which the
/// caller fires the trigger exactly once.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    input: String,
}

impl TerminalSurface {
    /// Creates a surface with an empty input control.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the input control, for one-shot invocations where the URL
    /// arrives as a command-line argument instead of a keystroke.
    pub fn with_input(value: &str) -> Self {
        Self {
            input: value.to_string(),
        }
    }

    /// Blocks until the user submits a line with Enter, storing it as the
    /// input control's value.
    ///
    /// Empty submissions are allowed; the trigger turns them into the
    /// validation message.
    ///
    /// # Errors
    ///
    /// Returns an error when the prompt is interrupted or the terminal is
    /// unavailable.
    pub fn read_line(&mut self) -> dialoguer::Result<()> {
        let line: String = Input::new()
            .with_prompt("URL")
            .allow_empty(true)
            .interact_text()?;

        self.input = line;
        Ok(())
    }
}

impl Surface for TerminalSurface {
    fn input_value(&self) -> String {
        self.input.clone()
    }

    fn set_input_value(&mut self, value: &str) {
        self.input = value.to_string();
    }

    fn render_result(&mut self, outcome: &ShortenOutcome) {
        match outcome {
            Ok(link) => {
                // Most terminals linkify the URL, so it stays clickable.
                println!(
                    "{} {}",
                    "Shortened URL:".green().bold(),
                    link.short_url.bright_cyan().underline()
                );
            }
            Err(err) => println!("{}", format_error(err).red()),
        }
    }
}
