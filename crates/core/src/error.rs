//! Errors reported by the strict scoring entry points.
//!
//! The permissive functions in [`scoring`](crate::scoring) never fail; these
//! errors only come from `try_*` variants that reject line counts a real
//! board cannot produce.

use thiserror::Error;

/// Rejection from a strict scoring operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// More rows than a single placement can clear.
    #[error("cannot clear {lines} lines at once (maximum is {max})")]
    InvalidLineCount { lines: u32, max: u32 },

    /// An event in a replayed history was rejected.
    #[error("event #{index} rejected: {source}")]
    InvalidEvent {
        index: usize,
        #[source]
        source: Box<ScoreError>,
    },
}

impl ScoreError {
    /// Position of the offending event in a replay, if any.
    pub fn event_index(&self) -> Option<usize> {
        match self {
            Self::InvalidEvent { index, .. } => Some(*index),
            Self::InvalidLineCount { .. } => None,
        }
    }
}
