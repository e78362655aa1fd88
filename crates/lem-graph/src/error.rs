//! Graph-subsystem error type.

use thiserror::Error;

use lem_core::RoomId;

/// Errors produced by `lem-graph`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("no path from {from} to {to}")]
    NoPath { from: RoomId, to: RoomId },

    #[error("room {0} not found in graph")]
    RoomNotFound(RoomId),

    #[error("route search from {0} to itself")]
    SameEndpoints(RoomId),
}

pub type GraphResult<T> = Result<T, GraphError>;
