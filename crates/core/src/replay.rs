//! Event replay - rebuild a score from a recorded sequence of [`ScoreEvent`]s

use crate::error::ScoreError;
use crate::scoring::{add_points, apply_line_clear, create_initial_state, try_apply_line_clear};
use crate::types::{ScoreEvent, ScoreState};

/// Apply a single event to `state`.
pub fn apply_event(event: ScoreEvent, state: ScoreState) -> ScoreState {
    match event {
        ScoreEvent::LineClear { lines } => apply_line_clear(lines, state),
        ScoreEvent::Points { points } => add_points(points, state),
        ScoreEvent::Reset => create_initial_state(),
    }
}

/// Strict form of [`apply_event`].
pub fn try_apply_event(event: ScoreEvent, state: ScoreState) -> Result<ScoreState, ScoreError> {
    match event {
        ScoreEvent::LineClear { lines } => try_apply_line_clear(lines, state),
        other => Ok(apply_event(other, state)),
    }
}

/// Fold `events` over a fresh game.
pub fn replay<I>(events: I) -> ScoreState
where
    I: IntoIterator<Item = ScoreEvent>,
{
    events.into_iter().fold(create_initial_state(), |state, event| {
        let next = apply_event(event, state);
        tracing::trace!(
            ?event,
            clear = event.is_clear(),
            score = next.score,
            lines = next.lines_cleared,
            "replayed"
        );
        next
    })
}

/// Fold `events` over a fresh game, stopping at the first rejected event.
pub fn try_replay<I>(events: I) -> Result<ScoreState, ScoreError>
where
    I: IntoIterator<Item = ScoreEvent>,
{
    let mut state = create_initial_state();
    for (index, event) in events.into_iter().enumerate() {
        state = try_apply_event(event, state).map_err(|source| ScoreError::InvalidEvent {
            index,
            source: Box::new(source),
        })?;
        tracing::trace!(index, ?event, clear = event.is_clear(), score = state.score, "replayed");
    }
    Ok(state)
}
