//! Score replay runner (default binary).
//!
//! Reads a JSON array of score events from a file (positional argument or
//! `TETRIS_SCORE_INPUT`) or stdin, replays it from a fresh game, and prints
//! the final score summary as JSON. Logging goes to stderr via `RUST_LOG`.

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tetris_score::config::ReplayConfig;
use tetris_score::summary::{read_events, summarize};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = ReplayConfig::parse();
    tracing::debug!(?config, "starting replay");

    let events = match &config.input_path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            read_events(BufReader::new(file))?
        }
        None => read_events(io::stdin().lock())?,
    };

    let summary = summarize(events, config.strict)?;

    let out = if config.pretty {
        serde_json::to_string_pretty(&summary)?
    } else {
        serde_json::to_string(&summary)?
    };
    println!("{out}");
    Ok(())
}
