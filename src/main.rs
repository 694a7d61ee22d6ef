//! Command-line client for a URL shortener service.
//!
//! Submits a URL to the server's `/shorten` endpoint and prints the returned
//! short link, or an error message in red.
//!
//! # Usage
//!
//! ```bash
//! # One-shot: shorten a single URL and exit
//! shorten https://example.com/some/long/path
//!
//! # Interactive: prompt for URLs, Enter submits, `quit` exits
//! shorten
//!
//! # Point at a different server
//! shorten --server https://links.example.com https://example.com
//! ```
//!
//! # Environment Variables
//!
//! - `SHORTENER_URL` - Server base URL (default: `http://localhost:8080`)
//! - `RUST_LOG` - Log level (default: `warn`)

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use shorten_cli::api::HttpShortenApi;
use shorten_cli::config::Config;
use shorten_cli::trigger::ShortenTrigger;
use shorten_cli::ui::{Surface, TerminalSurface};
use tracing_subscriber::EnvFilter;

/// Command-line client for a URL shortener service.
#[derive(Parser)]
#[command(name = "shorten")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// URL to shorten; omit to start an interactive prompt
    url: Option<String>,

    /// Server base URL (overrides SHORTENER_URL)
    #[arg(short, long)]
    server: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(cli.server.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .init();

    let api = HttpShortenApi::new(&config.server_url)?;
    let trigger = ShortenTrigger::new(api);

    match cli.url {
        Some(url) => run_once(&trigger, &url).await,
        None => run_interactive(&trigger).await,
    }
}

/// Shortens a single URL passed on the command line.
///
/// The outcome is already rendered by the surface; this only maps it to the
/// process exit code so the command composes in scripts.
async fn run_once(trigger: &ShortenTrigger<HttpShortenApi>, url: &str) -> Result<()> {
    let mut surface = TerminalSurface::with_input(url);

    if trigger.shorten(&mut surface).await.is_err() {
        std::process::exit(1);
    }

    Ok(())
}

/// Prompt loop: each line submitted with Enter fires the trigger once.
///
/// `quit` / `exit` (or an interrupted prompt, e.g. Ctrl-C) ends the loop.
/// Invocations never overlap: the loop awaits each outcome before prompting
/// again.
async fn run_interactive(trigger: &ShortenTrigger<HttpShortenApi>) -> Result<()> {
    println!("{}", "URL Shortener".bright_blue().bold());
    println!(
        "Enter a URL and press Enter to shorten it ({} to leave).",
        "quit".cyan()
    );
    println!();

    let mut surface = TerminalSurface::new();

    loop {
        if surface.read_line().is_err() {
            break;
        }

        if matches!(surface.input_value().trim(), "quit" | "exit") {
            break;
        }

        // Errors are already rendered in the result region; the loop just
        // moves on to the next entry.
        let _ = trigger.shorten(&mut surface).await;
    }

    Ok(())
}
