//! Tetris score tracking (workspace facade crate).
//!
//! The scoring rules live in dedicated crates under `crates/`; this package
//! re-exports them as `tetris_score::{core,types}` and hosts the pieces of the
//! `score-replay` developer tool.

pub mod config;
pub mod summary;

pub use tetris_score_core as core;
pub use tetris_score_types as types;
