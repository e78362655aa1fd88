//! Error types for lem-io.

use thiserror::Error;

use lem_sim::TopologyError;

/// Errors raised while reading a farm description or handing it to the
/// solver.
///
/// Wrapped errors stay in the source chain rather than the message, so
/// `{:#}` prints each cause once.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read farm")]
    Io(#[from] std::io::Error),

    /// Line `line` (1-based) could not be understood.
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// A `##start` / `##end` marker is absent or not followed by a room.
    #[error("no room given for {0}")]
    MissingMarker(&'static str),

    /// Zero or negative agent count.
    #[error(transparent)]
    Topology(#[from] TopologyError),
}

pub type LoadResult<T> = Result<T, LoadError>;

/// Errors that can occur when writing the move log.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("CSV write error")]
    Csv(#[from] csv::Error),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
