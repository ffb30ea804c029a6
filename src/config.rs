//! Replay tool configuration
//!
//! Every option can come from the command line or the environment; command
//! line values win.

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::Parser;

/// Replay a JSON log of score events and print the final score
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "score-replay")]
#[command(about = "Replay a Tetris score event log", long_about = None)]
#[command(version)]
pub struct ReplayConfig {
    /// Event log to read (defaults to stdin)
    #[arg(value_name = "FILE", env = "TETRIS_SCORE_INPUT")]
    pub input_path: Option<PathBuf>,

    /// Reject clears of more than four lines instead of scoring them as zero
    #[arg(short, long, env = "TETRIS_SCORE_STRICT", value_parser = BoolishValueParser::new())]
    pub strict: bool,

    /// Pretty-print the JSON summary
    #[arg(short, long, env = "TETRIS_SCORE_PRETTY", value_parser = BoolishValueParser::new())]
    pub pretty: bool,
}
