//! Shared error type.
//!
//! Sub-crates define their own error enums (`GraphError`, `ScheduleError`,
//! `SolveError`, …) and keep `LemError` for failures that are not specific
//! to one stage.

use thiserror::Error;

/// The base error type for `lem-core` and a common building block for
/// sub-crates.
#[derive(Debug, Error)]
pub enum LemError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `lem-core`.
pub type LemResult<T> = Result<T, LemError>;
