//! Scoring tests - line clears, levels, and point awards through the facade

use tetris_score::core::{
    add_points, apply_line_clear, compute_level, create_initial_state, try_apply_line_clear,
    ScoreError,
};
use tetris_score::types::ScoreState;

fn state(score: u64, lines_cleared: u32, last_clear_was_tetris: bool) -> ScoreState {
    ScoreState {
        score,
        lines_cleared,
        last_clear_was_tetris,
    }
}

#[test]
fn test_initial_state_is_zeroed() {
    let initial = create_initial_state();
    assert_eq!(initial.score, 0);
    assert_eq!(initial.lines_cleared, 0);
    assert!(!initial.last_clear_was_tetris);
}

#[test]
fn test_level_bands() {
    for lines in 0..200u32 {
        let expected = lines / 10 + 1;
        let s = state(0, lines, false);
        assert_eq!(compute_level(s), expected, "lines = {}", lines);
        // Same state, same level
        assert_eq!(compute_level(s), compute_level(s));
    }
}

#[test]
fn test_clear_updates_lines_and_flag() {
    let starts = [
        state(0, 0, false),
        state(1200, 8, true),
        state(5000, 37, false),
        state(99, 99, true),
    ];
    for start in starts {
        for lines in 1..=4u32 {
            let next = apply_line_clear(lines, start);
            assert_eq!(next.lines_cleared, start.lines_cleared + lines);
            assert_eq!(next.last_clear_was_tetris, lines == 4);
            assert!(next.score > start.score);
        }
    }
}

#[test]
fn test_add_points_only_touches_score() {
    let starts = [state(0, 0, false), state(1600, 14, true), state(42, 3, false)];
    for start in starts {
        let next = add_points(50, start);
        assert_eq!(next.score, start.score + 50);
        assert_eq!(next.lines_cleared, start.lines_cleared);
        assert_eq!(next.last_clear_was_tetris, start.last_clear_was_tetris);
    }
}

#[test]
fn test_single_on_fresh_game() {
    let next = apply_line_clear(1, create_initial_state());
    assert_eq!(next, state(100, 1, false));
}

#[test]
fn test_tetris_then_back_to_back_tetris_at_level_two() {
    let start = state(0, 10, false);
    assert_eq!(compute_level(start), 2);

    let first = apply_line_clear(4, start);
    assert_eq!(first.score, 1600);
    assert_eq!(first.lines_cleared, 14);
    assert!(first.last_clear_was_tetris);
    assert_eq!(compute_level(first), 2);

    let second = apply_line_clear(4, first);
    assert_eq!(second.score, 1600 + 2400);
    assert_eq!(second.lines_cleared, 18);
    assert!(second.last_clear_was_tetris);
}

#[test]
fn test_zero_line_clear() {
    let start = state(700, 6, true);
    let next = apply_line_clear(0, start);
    assert_eq!(next.score, 700);
    assert_eq!(next.lines_cleared, 6);
    assert!(!next.last_clear_was_tetris);
}

#[test]
fn test_drop_bonus() {
    let start = state(1600, 14, true);
    assert_eq!(add_points(50, start), state(1650, 14, true));
}

#[test]
fn test_score_never_decreases_over_a_game() {
    let mut current = create_initial_state();
    let mut last_score = 0;
    let mut last_lines = 0;
    for (i, lines) in [1u32, 4, 4, 0, 2, 3, 4, 7, 1, 4].into_iter().enumerate() {
        current = apply_line_clear(lines, current);
        current = add_points(i as u64, current);
        assert!(current.score >= last_score);
        assert!(current.lines_cleared >= last_lines);
        last_score = current.score;
        last_lines = current.lines_cleared;
    }
}

#[test]
fn test_strict_clear_rejects_impossible_counts() {
    let start = state(300, 2, false);
    for lines in 0..=4u32 {
        assert_eq!(try_apply_line_clear(lines, start), Ok(apply_line_clear(lines, start)));
    }
    assert_eq!(
        try_apply_line_clear(5, start),
        Err(ScoreError::InvalidLineCount { lines: 5, max: 4 })
    );
}
