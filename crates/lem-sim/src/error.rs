use lem_core::LemError;
use lem_graph::GraphError;
use lem_schedule::ScheduleError;
use thiserror::Error;

/// Input problems detected before any route is computed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TopologyError {
    #[error("start room {0:?} is also the end room")]
    StartIsEnd(String),

    #[error("agent count must be positive, got {0}")]
    NoAgents(i64),
}

/// Anything that stops a solve.  Each variant renders as exactly one message,
/// so printing the full source chain never repeats text.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error(transparent)]
    InvalidTopology(#[from] TopologyError),

    /// No route joins the start and end rooms.  Names as written in the farm.
    #[error("no path from room {from:?} to room {to:?}")]
    NoPath { from: String, to: String },

    #[error(transparent)]
    Config(#[from] LemError),

    #[error(transparent)]
    Route(#[from] GraphError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

pub type SolveResult<T> = Result<T, SolveError>;
