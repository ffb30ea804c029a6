//! Scoring module - classic line-clear scoring with a back-to-back Tetris bonus
//!
//! Rules:
//! - A clear of 1-4 rows awards a base value scaled by the level *before* the clear.
//! - A Tetris directly after another Tetris awards 1200 instead of 800.
//! - Drop bonuses and other awards go through [`add_points`] and never touch
//!   the line count or the Tetris flag.
//!
//! Every function takes a [`ScoreState`] by value and returns a new one.

use crate::error::ScoreError;
use crate::types::{
    ScoreState, BACK_TO_BACK_TETRIS_SCORE, INITIAL_LEVEL, LINES_PER_LEVEL, LINE_SCORES,
    MAX_LINES_PER_CLEAR,
};

/// Score state for a freshly started (or restarted) game.
pub fn create_initial_state() -> ScoreState {
    ScoreState::new()
}

/// Level derived from cleared lines: 1 for 0-9 lines, 2 for 10-19, and so on.
pub fn compute_level(state: ScoreState) -> u32 {
    state.lines_cleared / LINES_PER_LEVEL + INITIAL_LEVEL
}

/// Base award for clearing `lines` rows at once, before the level multiplier.
///
/// Line counts outside 1-4 award nothing.
pub fn base_award(lines: u32, last_clear_was_tetris: bool) -> u64 {
    match lines {
        4 if last_clear_was_tetris => BACK_TO_BACK_TETRIS_SCORE,
        1..=4 => LINE_SCORES[lines as usize],
        _ => 0,
    }
}

/// Apply one clear event of `num_lines` rows removed simultaneously.
///
/// Never fails: unknown line counts award zero points but still add to the
/// line total and reset the Tetris flag. Use [`try_apply_line_clear`] to
/// reject them instead.
pub fn apply_line_clear(num_lines: u32, state: ScoreState) -> ScoreState {
    if num_lines > MAX_LINES_PER_CLEAR {
        tracing::debug!(
            lines = num_lines,
            max = MAX_LINES_PER_CLEAR,
            "line clear outside the award table; no points awarded"
        );
    }

    // Level is taken before the rows of this clear are counted.
    let level = compute_level(state) as u64;
    let award = base_award(num_lines, state.last_clear_was_tetris).saturating_mul(level);

    ScoreState {
        score: state.score.saturating_add(award),
        lines_cleared: state.lines_cleared.saturating_add(num_lines),
        last_clear_was_tetris: num_lines == 4,
    }
}

/// Strict form of [`apply_line_clear`]: rejects more rows than one placement can clear.
pub fn try_apply_line_clear(num_lines: u32, state: ScoreState) -> Result<ScoreState, ScoreError> {
    if num_lines > MAX_LINES_PER_CLEAR {
        return Err(ScoreError::InvalidLineCount {
            lines: num_lines,
            max: MAX_LINES_PER_CLEAR,
        });
    }
    Ok(apply_line_clear(num_lines, state))
}

/// Add points that are not tied to a line clear (e.g. drop bonuses).
pub fn add_points(points: u64, state: ScoreState) -> ScoreState {
    ScoreState {
        score: state.score.saturating_add(points),
        ..state
    }
}
