//! Core scoring logic - pure, deterministic, and testable
//!
//! This crate turns line clears and bonus awards into a running score. It has
//! **zero dependencies** on the board, UI, or I/O:
//!
//! - **Pure**: every operation takes a [`ScoreState`] by value and returns a new one
//! - **Total**: the permissive operations accept any line count and never fail
//! - **Thread-safe**: states are `Copy + Send + Sync`; each game threads its own value
//!
//! # Module Structure
//!
//! - [`scoring`]: initial state, level, line clears, and point awards
//! - [`replay`]: rebuild a score from a recorded event history
//! - [`error`]: rejections from the strict `try_*` variants
//!
//! # Scoring Rules
//!
//! - **Level**: starts at 1 and rises every 10 cleared lines
//! - **Line clears**: 100 / 300 / 500 / 800 for 1-4 rows, times the level before the clear
//! - **Back-to-back Tetris**: a Tetris right after a Tetris is worth 1200 instead of 800
//! - **Points**: drop bonuses are added as-is and leave the Tetris streak alone
//!
//! # Example
//!
//! ```
//! use tetris_score_core::{add_points, apply_line_clear, compute_level, create_initial_state};
//!
//! let score = create_initial_state();
//! let score = apply_line_clear(4, score); // Tetris: 800 at level 1
//! let score = add_points(12, score); // hard drop bonus
//! let score = apply_line_clear(4, score); // back-to-back: 1200 at level 1
//!
//! assert_eq!(score.score, 2012);
//! assert_eq!(score.lines_cleared, 8);
//! assert!(score.last_clear_was_tetris);
//! assert_eq!(compute_level(score), 1);
//! ```

pub mod error;
pub mod replay;
pub mod scoring;

pub use tetris_score_types as types;

// Re-export commonly used items for convenience
pub use error::ScoreError;
pub use replay::{apply_event, replay, try_apply_event, try_replay};
pub use scoring::{
    add_points, apply_line_clear, base_award, compute_level, create_initial_state,
    try_apply_line_clear,
};
pub use types::{ScoreEvent, ScoreState};
