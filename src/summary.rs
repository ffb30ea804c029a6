//! Event log parsing and the replay summary printed by `score-replay`.

use std::io::Read;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{compute_level, replay, try_replay};
use crate::types::{ScoreEvent, ScoreState};

/// Final score plus the derived level, as shown on a game-over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreSummary {
    pub score: u64,
    pub lines_cleared: u32,
    pub last_clear_was_tetris: bool,
    pub level: u32,
}

impl From<ScoreState> for ScoreSummary {
    fn from(state: ScoreState) -> Self {
        Self {
            score: state.score,
            lines_cleared: state.lines_cleared,
            last_clear_was_tetris: state.last_clear_was_tetris,
            level: compute_level(state),
        }
    }
}

/// Read a JSON array of events
pub fn read_events<R: Read>(reader: R) -> Result<Vec<ScoreEvent>> {
    serde_json::from_reader(reader).context("event log is not a JSON array of score events")
}

/// Replay `events` and summarize the result
pub fn summarize(events: Vec<ScoreEvent>, strict: bool) -> Result<ScoreSummary> {
    let count = events.len();
    let state = if strict {
        try_replay(events).map_err(|err| {
            let context = match err.event_index() {
                Some(index) => format!("strict replay failed at event {index}"),
                None => "strict replay failed".to_string(),
            };
            anyhow::Error::new(err).context(context)
        })?
    } else {
        replay(events)
    };
    tracing::info!(events = count, score = state.score, "replay finished");
    Ok(state.into())
}
