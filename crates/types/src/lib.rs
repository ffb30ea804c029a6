//! Core types module - shared score data structures and constants
//!
//! This crate defines the value types that flow between the score tracker and
//! its collaborators (board logic, game loop, renderer). All types are plain
//! data with no game logic attached, so they can be stored, copied, and
//! serialized freely.
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LINES_PER_LEVEL` | 10 | Cleared lines needed to advance one level |
//! | `INITIAL_LEVEL` | 1 | Level of a fresh game |
//! | `MAX_LINES_PER_CLEAR` | 4 | Most rows a single placement can clear |
//! | `BACK_TO_BACK_TETRIS_SCORE` | 1200 | Base award for a Tetris following a Tetris |
//!
//! # Base Awards
//!
//! Indexed by the number of lines cleared at once (before the level multiplier):
//!
//! | Lines | Award |
//! |-------|-------|
//! | 1 | 100 |
//! | 2 | 300 |
//! | 3 | 500 |
//! | 4 | 800 (1200 back-to-back) |
//!
//! # Examples
//!
//! ```
//! use tetris_score_types::{ScoreEvent, ScoreState};
//!
//! let state = ScoreState::new();
//! assert_eq!(state.score, 0);
//! assert_eq!(state.lines_cleared, 0);
//! assert!(!state.last_clear_was_tetris);
//!
//! let event: ScoreEvent = serde_json::from_str(r#"{"type":"lineClear","lines":4}"#).unwrap();
//! assert_eq!(event, ScoreEvent::LineClear { lines: 4 });
//! ```

use serde::{Deserialize, Serialize};

/// Cleared lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Level of a fresh game (levels are 1-based)
pub const INITIAL_LEVEL: u32 = 1;

/// Maximum number of rows a single placement can clear
pub const MAX_LINES_PER_CLEAR: u32 = 4;

/// Base awards by lines cleared at once.
///
/// Index 0 is unused (no award); index 4 is the single Tetris award.
pub const LINE_SCORES: [u64; 5] = [0, 100, 300, 500, 800];

/// Base award for a Tetris when the previous clear was also a Tetris
pub const BACK_TO_BACK_TETRIS_SCORE: u64 = 1200;

/// Cumulative scoring state of one game.
///
/// Values are never mutated in place by the tracker: every scoring operation
/// takes a state by value and returns a new one. The serialized form uses the
/// three field names verbatim, which is the layout hosts should use when they
/// persist a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ScoreState {
    /// Points earned so far
    pub score: u64,
    /// Individual rows removed across all clear events
    pub lines_cleared: u32,
    /// Whether the most recent clear event removed exactly four rows
    pub last_clear_was_tetris: bool,
}

impl ScoreState {
    /// Fresh state for a new game: zero score, zero lines, no Tetris streak.
    pub const fn new() -> Self {
        Self {
            score: 0,
            lines_cleared: 0,
            last_clear_was_tetris: false,
        }
    }
}

/// A single scoring event reported by the game loop.
///
/// Sequences of events describe a game's scoring history and can be replayed
/// to reconstruct the final [`ScoreState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ScoreEvent {
    /// `lines` rows were removed from the board at once
    LineClear { lines: u32 },
    /// Bonus points not tied to a clear (soft/hard drop distance etc.)
    Points { points: u64 },
    /// Game restarted; scoring starts over
    Reset,
}

impl ScoreEvent {
    /// Whether this event is a clear event (the only kind that touches the Tetris flag)
    pub fn is_clear(&self) -> bool {
        matches!(self, ScoreEvent::LineClear { .. })
    }
}
