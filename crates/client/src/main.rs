//! Terminal battle client.
//!
//! Composition root: loads configuration, sets up file logging, and plays one
//! battle with stdin prompts and console output.
//!
//! ```bash
//! # Replay the same battle every time
//! BATTLE_SEED=42 cargo run -p battle-client
//! ```
mod config;
mod input;
mod logging;
mod presentation;

use anyhow::{Context, Result};
use runtime::{Runtime, RuntimeError};

use config::ClientConfig;
use input::TerminalPrompt;
use presentation::ConsoleSink;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let _log_guard = logging::setup_logging(&config)?;

    tracing::info!(seed = ?config.seed, color = config.color, "starting battle client");

    let mut runtime = Runtime::builder()
        .config(config.runtime_config())
        .prompts(TerminalPrompt::new(config.color))
        .sink(ConsoleSink::new(config.color))
        .build()
        .context("failed to assemble the battle runtime")?;

    match runtime.run().await {
        Ok(outcome) => {
            tracing::info!(
                status = %outcome.status,
                rounds_cleared = outcome.rounds_cleared,
                "client shutdown complete"
            );
            Ok(())
        }
        Err(RuntimeError::PromptClosed) => {
            tracing::info!("input closed, leaving the battle");
            Ok(())
        }
        Err(err) => Err(err).context("battle aborted"),
    }
}
