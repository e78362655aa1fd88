//! `lem-core`: foundational types for the `lem-in` ant-farm router.
//!
//! This crate is a dependency of every other `lem-*` crate.  It has no
//! `lem-*` dependencies and a single external one (`thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `RoomId`, `AgentId`, `LaneId`                         |
//! | [`turn`]        | `Turn`, the discrete simulation step                 |
//! | [`config`]      | `SolveConfig`, `TerminationRule`                      |
//! | [`error`]       | `LemError`, `LemResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod turn;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{SolveConfig, TerminationRule};
pub use error::{LemError, LemResult};
pub use ids::{AgentId, LaneId, RoomId};
pub use turn::Turn;
